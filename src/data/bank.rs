//! The compiled-in adware question bank.

use std::collections::HashSet;

use crate::data::LoadError;
use crate::models::{CategoryCount, Question, OPTIONS_PER_QUESTION};

/// Ordered, read-only sequence of assessment questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from arbitrary questions, checking ids and answer indices.
    pub fn new(questions: Vec<Question>) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.correct_answer >= OPTIONS_PER_QUESTION {
                return Err(LoadError::InvalidAnswer {
                    id: question.id,
                    index: question.correct_answer,
                });
            }
            if !seen.insert(question.id) {
                return Err(LoadError::DuplicateId(question.id));
            }
        }

        Ok(Self { questions })
    }

    /// The 25 adware questions shipped with the trainer.
    pub fn builtin() -> Self {
        let questions = BUILTIN_QUESTIONS
            .iter()
            .map(|seed| Question {
                id: seed.id,
                prompt: seed.prompt.to_string(),
                options: seed.options.map(str::to_string),
                correct_answer: seed.correct_answer,
                explanation: seed.explanation.to_string(),
                category: seed.category.to_string(),
            })
            .collect();

        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question count per category, in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for question in &self.questions {
            match counts.iter_mut().find(|c| c.category == question.category) {
                Some(entry) => entry.count += 1,
                None => counts.push(CategoryCount {
                    category: question.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

struct QuestionSeed {
    id: u32,
    prompt: &'static str,
    options: [&'static str; OPTIONS_PER_QUESTION],
    correct_answer: usize,
    explanation: &'static str,
    category: &'static str,
}

const BUILTIN_QUESTIONS: [QuestionSeed; 25] = [
    QuestionSeed {
        id: 1,
        prompt: "What is the primary characteristic that distinguishes adware from other types of malware?",
        options: [
            "It encrypts user files for ransom",
            "It displays unwanted advertisements to generate revenue",
            "It steals banking credentials",
            "It creates backdoors for remote access",
        ],
        correct_answer: 1,
        explanation: "Adware's primary purpose is to display advertisements to generate revenue for its creators, distinguishing it from other malware types.",
        category: "Fundamentals",
    },
    QuestionSeed {
        id: 2,
        prompt: "Which of the following is NOT a common distribution method for adware?",
        options: [
            "Software bundling with legitimate applications",
            "Malicious email attachments",
            "Direct physical access to the computer",
            "Drive-by downloads from compromised websites",
        ],
        correct_answer: 2,
        explanation: "Adware typically spreads through digital means. Direct physical access is not a common distribution method for adware.",
        category: "Distribution",
    },
    QuestionSeed {
        id: 3,
        prompt: "What is browser hijacking in the context of adware?",
        options: [
            "Stealing browser passwords",
            "Modifying browser settings without user consent",
            "Preventing browser from starting",
            "Installing additional browsers",
        ],
        correct_answer: 1,
        explanation: "Browser hijacking involves unauthorized modification of browser settings like homepage, search engine, and new tab page.",
        category: "Browser Security",
    },
    QuestionSeed {
        id: 4,
        prompt: "Which browser setting is most commonly targeted by adware for modification?",
        options: [
            "Cookie preferences",
            "Download location",
            "Homepage and search engine",
            "Font size settings",
        ],
        correct_answer: 2,
        explanation: "Adware frequently changes homepage and default search engine settings to redirect users to advertising-supported websites.",
        category: "Browser Security",
    },
    QuestionSeed {
        id: 5,
        prompt: "What is the most effective first step when suspecting an adware infection?",
        options: [
            "Restart the computer immediately",
            "Disconnect from the internet",
            "Delete all browser cookies",
            "Run a disk cleanup",
        ],
        correct_answer: 1,
        explanation: "Disconnecting from the internet prevents further data transmission and stops the adware from downloading additional components.",
        category: "Incident Response",
    },
    QuestionSeed {
        id: 6,
        prompt: "Which of the following is a legitimate advertisement that should NOT be considered adware?",
        options: [
            "Pop-ups that appear on sites that normally don't have ads",
            "Contextual ads on reputable news websites",
            "Ads that follow you across different websites",
            "Pop-ups claiming your computer is infected",
        ],
        correct_answer: 1,
        explanation: "Contextual ads on legitimate websites are normal business practices, unlike intrusive adware-generated advertisements.",
        category: "Identification",
    },
    QuestionSeed {
        id: 7,
        prompt: "What is device fingerprinting in the context of adware tracking?",
        options: [
            "Scanning physical fingerprints through the touchscreen",
            "Creating a unique identifier based on device characteristics",
            "Installing tracking software on mobile devices",
            "Monitoring keyboard typing patterns",
        ],
        correct_answer: 1,
        explanation: "Device fingerprinting creates a unique identifier using various device characteristics like screen resolution, installed fonts, and hardware specifications.",
        category: "Tracking",
    },
    QuestionSeed {
        id: 8,
        prompt: "Which Windows location is commonly modified by adware to ensure persistence?",
        options: [
            "Desktop wallpaper settings",
            "System registry startup entries",
            "Recycle bin contents",
            "Screen saver settings",
        ],
        correct_answer: 1,
        explanation: "Adware often modifies registry startup entries to ensure it runs automatically when the system boots.",
        category: "System Impact",
    },
    QuestionSeed {
        id: 9,
        prompt: "What is the recommended approach for removing browser extensions suspected of being adware?",
        options: [
            "Disable them temporarily",
            "Remove them completely and reinstall from official sources if needed",
            "Update them to the latest version",
            "Change their permissions only",
        ],
        correct_answer: 1,
        explanation: "Complete removal is recommended, followed by reinstallation from official sources if the extension is legitimately needed.",
        category: "Removal",
    },
    QuestionSeed {
        id: 10,
        prompt: "Which of the following is the most reliable method to verify if a security warning is legitimate?",
        options: [
            "Click on the warning to get more information",
            "Check if it mentions specific file names",
            "Verify through official channels or known security software",
            "Look for spelling and grammar errors",
        ],
        correct_answer: 2,
        explanation: "Always verify security warnings through official channels or trusted security software rather than trusting the warning itself.",
        category: "Social Engineering",
    },
    QuestionSeed {
        id: 11,
        prompt: "What is the primary risk of clicking on adware-generated advertisements?",
        options: [
            "Immediate system shutdown",
            "Installation of additional malware",
            "Automatic file deletion",
            "Network disconnection",
        ],
        correct_answer: 1,
        explanation: "Clicking on adware ads can lead to drive-by downloads and installation of additional malware or potentially unwanted programs.",
        category: "Risk Assessment",
    },
    QuestionSeed {
        id: 12,
        prompt: "Which network-level protection is most effective against adware command and control communications?",
        options: [
            "Increasing bandwidth",
            "DNS filtering and threat intelligence",
            "Disabling wireless connections",
            "Using multiple internet providers",
        ],
        correct_answer: 1,
        explanation: "DNS filtering can block communications with known malicious domains used by adware for command and control.",
        category: "Network Security",
    },
    QuestionSeed {
        id: 13,
        prompt: "What is the significance of digital signatures when downloading software to prevent adware?",
        options: [
            "They make software run faster",
            "They verify the software publisher's authenticity",
            "They reduce file size",
            "They improve software compatibility",
        ],
        correct_answer: 1,
        explanation: "Digital signatures verify that software comes from a legitimate publisher and hasn't been tampered with, reducing adware risk.",
        category: "Prevention",
    },
    QuestionSeed {
        id: 14,
        prompt: "Which installation option should be chosen to avoid bundled adware?",
        options: [
            "Express/Quick installation",
            "Custom/Advanced installation",
            "Automatic installation",
            "Default installation",
        ],
        correct_answer: 1,
        explanation: "Custom/Advanced installation allows users to see and decline bundled software that may include adware.",
        category: "Prevention",
    },
    QuestionSeed {
        id: 15,
        prompt: "What is the most common behavioral indicator of adware infection?",
        options: [
            "Faster internet browsing",
            "Unexpected advertisements appearing frequently",
            "Improved system performance",
            "Automatic software updates",
        ],
        correct_answer: 1,
        explanation: "The most obvious sign of adware is the appearance of unexpected, intrusive advertisements during normal browsing.",
        category: "Identification",
    },
    QuestionSeed {
        id: 16,
        prompt: "Which type of website is most commonly used for adware distribution through drive-by downloads?",
        options: [
            "Government websites",
            "Compromised legitimate websites",
            "Educational institution sites",
            "Banking websites",
        ],
        correct_answer: 1,
        explanation: "Compromised legitimate websites are often used because users trust them, making drive-by downloads more effective.",
        category: "Distribution",
    },
    QuestionSeed {
        id: 17,
        prompt: "What is the recommended frequency for running anti-malware scans to detect adware?",
        options: [
            "Once per year",
            "Only when problems occur",
            "Weekly or bi-weekly",
            "Once per month",
        ],
        correct_answer: 2,
        explanation: "Regular weekly or bi-weekly scans help detect adware early before it can cause significant damage or data collection.",
        category: "Best Practices",
    },
    QuestionSeed {
        id: 18,
        prompt: "Which browser security feature is most effective at preventing adware-related redirects?",
        options: [
            "Bookmark management",
            "Pop-up blockers and safe browsing",
            "Password managers",
            "Download managers",
        ],
        correct_answer: 1,
        explanation: "Pop-up blockers and safe browsing features can prevent many adware-related redirects and malicious site access.",
        category: "Browser Security",
    },
    QuestionSeed {
        id: 19,
        prompt: "What should be done immediately after successfully removing adware from a system?",
        options: [
            "Install more antivirus software",
            "Change all passwords and update software",
            "Disable internet connection permanently",
            "Reinstall the operating system",
        ],
        correct_answer: 1,
        explanation: "After adware removal, changing passwords and updating software helps secure the system and prevent reinfection.",
        category: "Post-Incident",
    },
    QuestionSeed {
        id: 20,
        prompt: "Which of the following is NOT a typical characteristic of adware-generated pop-ups?",
        options: [
            "Difficult to close or persistent",
            "Contain urgent or threatening language",
            "Appear only on specific legitimate websites",
            "Offer unrealistic prizes or deals",
        ],
        correct_answer: 2,
        explanation: "Adware pop-ups typically appear across multiple sites, not just on specific legitimate websites.",
        category: "Identification",
    },
    QuestionSeed {
        id: 21,
        prompt: "What is the primary purpose of adware from the attacker's perspective?",
        options: [
            "System destruction",
            "Data encryption",
            "Revenue generation through advertising",
            "Network disruption",
        ],
        correct_answer: 2,
        explanation: "Adware is primarily designed to generate revenue through forced advertisement viewing and click fraud.",
        category: "Fundamentals",
    },
    QuestionSeed {
        id: 22,
        prompt: "Which user education topic is most critical for preventing adware infections?",
        options: [
            "Advanced networking concepts",
            "Safe software installation practices",
            "Programming fundamentals",
            "Hardware troubleshooting",
        ],
        correct_answer: 1,
        explanation: "Teaching users about safe software installation practices is crucial since bundled software is a primary adware distribution method.",
        category: "User Education",
    },
    QuestionSeed {
        id: 23,
        prompt: "What is the most reliable way to distinguish between legitimate system notifications and adware alerts?",
        options: [
            "Check the color scheme",
            "Verify through official system tools and known security software",
            "Count the number of exclamation marks",
            "Look at the font style used",
        ],
        correct_answer: 1,
        explanation: "Always verify alerts through official system tools or trusted security software rather than trusting the appearance of the alert.",
        category: "Social Engineering",
    },
    QuestionSeed {
        id: 24,
        prompt: "Which enterprise security control is most effective for preventing adware infections at scale?",
        options: [
            "Individual user training only",
            "Application whitelisting and endpoint protection",
            "Increasing internet bandwidth",
            "Regular hardware replacement",
        ],
        correct_answer: 1,
        explanation: "Application whitelisting prevents unauthorized software execution, while endpoint protection provides real-time threat detection.",
        category: "Enterprise Security",
    },
    QuestionSeed {
        id: 25,
        prompt: "What is the recommended approach when encountering a website that triggers multiple security warnings?",
        options: [
            "Proceed carefully and avoid clicking ads",
            "Immediately close the browser tab and avoid the site",
            "Disable security warnings and continue",
            "Clear browser cache and reload the page",
        ],
        correct_answer: 1,
        explanation: "Multiple security warnings indicate a potentially dangerous site that should be avoided completely to prevent adware infection.",
        category: "Risk Assessment",
    },
];
