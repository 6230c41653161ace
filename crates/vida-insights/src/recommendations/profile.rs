use crate::catalog::domain::{ArticleId, Audience, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Visitor context supplied by the caller on every request. The engine only
/// reads it; nothing about the visitor is retained between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorProfile {
    pub role: Audience,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub saved_topics: BTreeSet<String>,
    #[serde(default)]
    pub completed_article_ids: BTreeSet<ArticleId>,
}

impl VisitorProfile {
    /// A first-time visitor who only picked a role.
    pub fn anonymous(role: Audience) -> Self {
        Self {
            role,
            language: Language::default(),
            saved_topics: BTreeSet::new(),
            completed_article_ids: BTreeSet::new(),
        }
    }

    pub fn with_saved_topic(mut self, topic: impl Into<String>) -> Self {
        self.saved_topics.insert(topic.into());
        self
    }

    pub fn with_completed(mut self, id: impl Into<ArticleId>) -> Self {
        self.completed_article_ids.insert(id.into());
        self
    }

    pub fn has_completed(&self, id: &ArticleId) -> bool {
        self.completed_article_ids.contains(id)
    }

    pub fn is_interested_in(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.saved_topics.contains(tag))
    }
}
