//! Nearest-label lookup by string similarity.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Case-insensitive fuzzy matcher over free-text identifiers.
///
/// A candidate scores in both directions (query inside candidate, and
/// candidate inside query) and keeps the better score. Exact matches always
/// win; ties keep the earliest candidate so lookups are deterministic.
pub struct NameMatcher {
    matcher: SkimMatcherV2,
    min_score: i64,
}

impl NameMatcher {
    pub fn new(min_score: i64) -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
            min_score,
        }
    }

    pub fn score(&self, query: &str, candidate: &str) -> Option<i64> {
        let query = query.trim();
        let candidate = candidate.trim();
        if query.is_empty() || candidate.is_empty() {
            return None;
        }
        if query.eq_ignore_ascii_case(candidate) {
            return Some(i64::MAX);
        }
        let forward = self.matcher.fuzzy_match(candidate, query);
        let backward = self.matcher.fuzzy_match(query, candidate);
        forward.max(backward)
    }

    /// Index and score of the best candidate at or above the minimum score.
    pub fn best<'a, I>(&self, query: &str, candidates: I) -> Option<(usize, i64)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(usize, i64)> = None;
        for (idx, candidate) in candidates.into_iter().enumerate() {
            let Some(score) = self.score(query, candidate) else {
                continue;
            };
            if score < self.min_score {
                continue;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((idx, score));
            }
        }
        best
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(0)
    }
}
