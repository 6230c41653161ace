use super::config::EngineConfig;
use super::jitter::JitterSource;
use super::profile::VisitorProfile;
use super::trace::Trace;
use crate::catalog::domain::{Article, PrimaryTag};

const FALLBACK_REASON: &str = "Recommended for you";
const UNTAGGED_NEXT_STEP: &str = "Explore more topics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoringRule {
    AudienceMatch,
    WildcardAudience,
    SavedTopic,
    Foundational,
}

impl ScoringRule {
    const fn label(self) -> &'static str {
        match self {
            Self::AudienceMatch => "audience match",
            Self::WildcardAudience => "wildcard audience",
            Self::SavedTopic => "saved topic match",
            Self::Foundational => "foundational boost",
        }
    }
}

/// Candidate with its additive score. `reasons` keeps the order in which rules
/// fired; the head is the justification shown to the visitor.
#[derive(Debug, Clone)]
pub(crate) struct ScoredCandidate<'a> {
    pub article: &'a Article,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl<'a> ScoredCandidate<'a> {
    pub fn primary_reason(&self) -> &str {
        self.reasons
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_REASON)
    }

    pub fn primary_tag(&self) -> PrimaryTag<'a> {
        self.article.primary_tag()
    }

    fn apply(&mut self, rule: ScoringRule, points: f64, reason: String, trace: &mut Trace) {
        self.score += points;
        self.reasons.push(reason);
        trace.rule(format!("{}: {} (+{})", self.article.id, rule.label(), points));
    }
}

pub(crate) fn score_candidate<'a>(
    article: &'a Article,
    profile: &VisitorProfile,
    config: &EngineConfig,
    jitter: &mut dyn JitterSource,
    trace: &mut Trace,
) -> ScoredCandidate<'a> {
    let mut candidate = ScoredCandidate {
        article,
        score: 0.0,
        reasons: Vec::new(),
    };

    if article.audience == profile.role {
        candidate.apply(
            ScoringRule::AudienceMatch,
            config.audience_match_points,
            format!("Perfect for {}s", profile.role.slug()),
            trace,
        );
    } else {
        candidate.apply(
            ScoringRule::WildcardAudience,
            config.wildcard_points,
            "General foundational knowledge".to_string(),
            trace,
        );
    }

    if profile.is_interested_in(&article.tags) {
        candidate.apply(
            ScoringRule::SavedTopic,
            config.saved_topic_points,
            "Matches your saved topics".to_string(),
            trace,
        );
    }

    if article.has_tag(&config.foundational_topic) {
        candidate.apply(
            ScoringRule::Foundational,
            config.foundational_points,
            "Recommended starting point".to_string(),
            trace,
        );
    }

    candidate.score += jitter.sample(config.max_jitter);
    trace.score(&article.id, candidate.score);

    tracing::debug!(
        article = %article.id,
        score = candidate.score,
        reason = candidate.primary_reason(),
        "candidate scored"
    );

    candidate
}

/// Hint pointing the visitor at the article's primary topic.
pub(crate) fn next_step_hint(article: &Article) -> String {
    match article.primary_tag() {
        PrimaryTag::Tagged(tag) => format!("Learn about {tag}"),
        PrimaryTag::Untagged => UNTAGGED_NEXT_STEP.to_string(),
    }
}
