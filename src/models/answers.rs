use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option per question index. Only answered questions have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    selections: BTreeMap<usize, usize>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier one for the same question.
    pub fn select(&mut self, question_index: usize, option: usize) -> Option<usize> {
        self.selections.insert(question_index, option)
    }

    pub fn get(&self, question_index: usize) -> Option<usize> {
        self.selections.get(&question_index).copied()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Indices in `0..total` that have no selection yet.
    pub fn unanswered(&self, total: usize) -> Vec<usize> {
        (0..total)
            .filter(|index| !self.selections.contains_key(index))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selections.iter().map(|(index, option)| (*index, *option))
    }
}
