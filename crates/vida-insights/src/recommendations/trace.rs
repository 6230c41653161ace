use crate::catalog::domain::ArticleId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Diagnostic record of one engine run. Never consulted by the ranking itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    pub applied_rules: Vec<String>,
    /// Articles dropped because the visitor already completed them.
    pub filtered_ids: Vec<ArticleId>,
    /// Articles dropped because their audience is neither the role nor the wildcard.
    pub audience_excluded_ids: Vec<ArticleId>,
    /// Final score of every scored candidate, selected or not.
    pub scores: BTreeMap<ArticleId, f64>,
}

impl Trace {
    pub(crate) fn rule(&mut self, line: impl Into<String>) {
        self.applied_rules.push(line.into());
    }

    pub(crate) fn completed(&mut self, id: &ArticleId) {
        self.filtered_ids.push(id.clone());
    }

    pub(crate) fn audience_excluded(&mut self, id: &ArticleId) {
        self.audience_excluded_ids.push(id.clone());
    }

    pub(crate) fn score(&mut self, id: &ArticleId, score: f64) {
        self.scores.insert(id.clone(), score);
    }

    pub fn score_of(&self, id: &ArticleId) -> Option<f64> {
        self.scores.get(id).copied()
    }
}
