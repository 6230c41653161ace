//! Deterministic article recommendations for a single visitor.
//!
//! A run filters the catalog down to eligible candidates, scores each one with
//! additive rules, ranks by score and walks the ranking to pick a short,
//! topic-diverse list. Every run also returns a [`Trace`] describing which
//! rules fired and which articles were dropped.

pub mod config;
mod diversity;
mod filter;
pub mod jitter;
pub mod profile;
mod ranking;
pub mod router;
mod rules;
pub mod trace;

#[cfg(test)]
mod tests;

pub use config::{EngineConfig, JitterMode, JitterModeParseError};
pub use jitter::{EntropyJitter, JitterSource, NoJitter, SeededJitter};
pub use profile::VisitorProfile;
pub use router::recommendation_router;
pub use trace::Trace;

use crate::catalog::domain::{Article, ArticleId, Catalog};
use diversity::DiversitySelector;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless engine; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommends from a catalog using the configured jitter mode.
    pub fn recommend(&self, profile: &VisitorProfile, catalog: &Catalog) -> RecommendationResponse {
        let mut jitter = jitter::source_for(self.config.jitter);
        self.recommend_with(profile, catalog.articles(), jitter.as_mut())
    }

    /// Same pipeline with a caller-supplied tie-break source.
    pub fn recommend_with(
        &self,
        profile: &VisitorProfile,
        articles: &[Article],
        jitter: &mut dyn JitterSource,
    ) -> RecommendationResponse {
        let mut trace = Trace::default();

        let candidates = filter::eligible_candidates(articles, profile, &mut trace);

        let mut scored = Vec::with_capacity(candidates.len());
        for article in candidates {
            scored.push(rules::score_candidate(
                article,
                profile,
                &self.config,
                jitter,
                &mut trace,
            ));
        }

        ranking::rank(&mut scored);

        let selector =
            DiversitySelector::new(self.config.max_results, self.config.diversity_min_pool);
        let selection = selector.select(scored);
        if selection.backfilled > 0 {
            trace.rule(format!(
                "Backfilled {} slot(s) after distinct primary tags ran out",
                selection.backfilled
            ));
        }

        let recommendations: Vec<Recommendation> = selection
            .picks
            .iter()
            .map(|candidate| Recommendation {
                article_id: candidate.article.id.clone(),
                title: candidate.article.title.clone(),
                reason: candidate.primary_reason().to_string(),
                next_step: rules::next_step_hint(candidate.article),
                score: candidate.score,
            })
            .collect();

        trace.rule(format!(
            "Selected top {} diverse recommendations",
            recommendations.len()
        ));

        debug!(
            role = %profile.role,
            candidates = trace.scores.len(),
            selected = recommendations.len(),
            "recommendations computed"
        );

        RecommendationResponse {
            recommendations,
            trace,
        }
    }
}

/// One suggested article with its displayed justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub article_id: ArticleId,
    pub title: String,
    pub reason: String,
    pub next_step: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub trace: Trace,
}
