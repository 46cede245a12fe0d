use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use adware_assessment::{AssessmentConfig, DEFAULT_PASS_THRESHOLD, QuestionBank, Trainer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Minimum percentage needed to pass
    #[arg(short, long, default_value_t = DEFAULT_PASS_THRESHOLD,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pass_threshold: u8,

    /// Directory certificates are saved to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    let config = AssessmentConfig::default().with_pass_threshold(args.pass_threshold);
    let trainer = match &args.questions {
        Some(path) => match Trainer::from_json(path, config) {
            Ok(trainer) => trainer,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => Trainer::new(QuestionBank::builtin(), config),
    };

    if let Err(e) = trainer.with_output_dir(args.output_dir).run() {
        eprintln!("Error running assessment: {}", e);
        process::exit(1);
    }
}
