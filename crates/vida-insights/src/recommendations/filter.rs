use super::profile::VisitorProfile;
use super::trace::Trace;
use crate::catalog::domain::Article;
use tracing::debug;

/// Drops completed and audience-ineligible articles, preserving catalog order.
pub(crate) fn eligible_candidates<'a>(
    articles: &'a [Article],
    profile: &VisitorProfile,
    trace: &mut Trace,
) -> Vec<&'a Article> {
    let mut candidates = Vec::with_capacity(articles.len());

    for article in articles {
        if profile.has_completed(&article.id) {
            debug!(article = %article.id, "skipping completed article");
            trace.completed(&article.id);
            continue;
        }

        if !article.is_visible_to(profile.role) {
            trace.audience_excluded(&article.id);
            continue;
        }

        candidates.push(article);
    }

    trace.rule(format!("Filtered candidates count: {}", candidates.len()));
    candidates
}
