use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A distinct word and how many times it occurred in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u32,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Word frequencies sorted by count descending.
///
/// Equal counts keep the order in which their words first appeared in the
/// token stream. The list is fully materialized; truncation is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedFrequencyList {
    entries: Vec<WordFrequency>,
}

impl RankedFrequencyList {
    /// Counts every token and ranks the result.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // IndexMap keeps first-insertion order, which is the tie-break.
        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }

        let mut entries: Vec<WordFrequency> = counts
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect();

        // Must be a stable sort: ties stay in first-occurrence order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { entries }
    }

    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordFrequency> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new list holding at most the first `limit` entries.
    pub fn top(&self, limit: usize) -> RankedFrequencyList {
        Self {
            entries: self.entries.iter().take(limit).cloned().collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordFrequency> {
        self.entries.iter().find(|e| e.word == word)
    }
}

impl<'a> IntoIterator for &'a RankedFrequencyList {
    type Item = &'a WordFrequency;
    type IntoIter = std::slice::Iter<'a, WordFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
