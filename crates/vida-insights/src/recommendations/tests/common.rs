use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::catalog::domain::{Article, ArticleId, Audience};
use crate::recommendations::{
    EngineConfig, JitterSource, NoJitter, RecommendationEngine, RecommendationResponse,
    VisitorProfile,
};

pub(super) fn article(id: &str, audience: Audience, tags: &[&str]) -> Article {
    Article {
        id: ArticleId::from(id),
        title: format!("Article {id}"),
        audience,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        summary: format!("Summary for {id}"),
        content: format!("Body for {id}"),
        content_beginner: None,
        content_advanced: None,
        image_url: String::new(),
        alt_text: String::new(),
        author: "Tech Team".to_string(),
        read_time_minutes: 5,
        publish_date: NaiveDate::from_ymd_opt(2024, 2, 2).expect("valid date"),
        series: None,
    }
}

pub(super) fn visitor(role: Audience) -> VisitorProfile {
    VisitorProfile::anonymous(role)
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(EngineConfig::default())
}

/// Runs the engine with the tie-break fixed to zero.
pub(super) fn recommend(profile: &VisitorProfile, articles: &[Article]) -> RecommendationResponse {
    engine().recommend_with(profile, articles, &mut NoJitter)
}

pub(super) fn ids(response: &RecommendationResponse) -> Vec<&str> {
    response
        .recommendations
        .iter()
        .map(|recommendation| recommendation.article_id.as_str())
        .collect()
}

/// Replays a fixed list of jitter values, then zeros.
pub(super) struct SequenceJitter {
    values: VecDeque<f64>,
}

impl SequenceJitter {
    pub(super) fn new(values: &[f64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl JitterSource for SequenceJitter {
    fn sample(&mut self, max: f64) -> f64 {
        self.values.pop_front().unwrap_or(0.0).min(max)
    }
}
