use super::rules::ScoredCandidate;

/// Orders candidates by score, highest first. The sort is stable, so exact
/// ties keep the order the filter produced them in.
pub(crate) fn rank(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
