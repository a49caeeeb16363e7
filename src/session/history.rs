use std::collections::VecDeque;

use super::types::RoundResult;

/// Append-only record of past rounds, newest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<RoundResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a round at the head and return it.
    pub fn push(&mut self, round: RoundResult) -> &RoundResult {
        self.entries.push_front(round);
        &self.entries[0]
    }

    pub fn latest(&self) -> Option<&RoundResult> {
        self.entries.front()
    }

    /// Rounds from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &RoundResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a RoundResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, RoundResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
