use std::collections::HashSet;
use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::org::OrgChart;

use super::{HighlightCache, ViewModel};

pub(in crate::app) const MAX_SEARCH_RESULTS: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::app) struct SearchHit {
    pub(in crate::app) id: String,
    pub(in crate::app) score: i64,
}

pub(in crate::app) struct SearchCache {
    query: String,
    hits: Arc<Vec<SearchHit>>,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

/// Every employee matching `query` on name, title, department or email,
/// best match first.
pub(in crate::app) fn search_employees(chart: &OrgChart, query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut hits = chart
        .preorder()
        .into_iter()
        .filter_map(|(node, _depth)| {
            [
                node.name.as_str(),
                node.title.as_str(),
                node.department.as_str(),
                node.email.as_str(),
            ]
            .into_iter()
            .filter_map(|field| fuzzy_match_score(&matcher, field, query))
            .max()
            .map(|score| SearchHit {
                id: node.id.clone(),
                score,
            })
        })
        .collect::<Vec<_>>();

    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
    hits
}

impl ViewModel {
    pub(in crate::app) fn cached_search_hits(&mut self) -> Arc<Vec<SearchHit>> {
        let query = self.search.trim();

        if let Some(cached) = &self.search_cache
            && cached.query == query
        {
            return Arc::clone(&cached.hits);
        }

        let hits = Arc::new(search_employees(&self.chart, query));
        self.search_cache = Some(SearchCache {
            query: query.to_owned(),
            hits: Arc::clone(&hits),
        });
        hits
    }

    /// Ids to tint on the canvas, or `None` when neither the search box nor
    /// the department filter is active.
    pub(in crate::app) fn highlighted_ids(&mut self) -> Option<Arc<HashSet<String>>> {
        let query = self.search.trim().to_owned();
        if query.is_empty() && self.department_filter.is_none() {
            return None;
        }

        if let Some(cached) = &self.highlight_cache
            && cached.query == query
            && cached.department == self.department_filter
        {
            return Some(Arc::clone(&cached.ids));
        }

        let search_ids = (!query.is_empty()).then(|| {
            self.cached_search_hits()
                .iter()
                .map(|hit| hit.id.clone())
                .collect::<HashSet<_>>()
        });

        let ids = self
            .chart
            .preorder()
            .into_iter()
            .filter(|(node, _)| {
                search_ids
                    .as_ref()
                    .is_none_or(|matches| matches.contains(&node.id))
            })
            .filter(|(node, _)| {
                self.department_filter
                    .as_deref()
                    .is_none_or(|department| node.department == department)
            })
            .map(|(node, _)| node.id.clone())
            .collect::<HashSet<_>>();
        let ids = Arc::new(ids);

        self.highlight_cache = Some(HighlightCache {
            query,
            department: self.department_filter.clone(),
            ids: Arc::clone(&ids),
        });

        Some(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::fixture::northwind;

    #[test]
    fn empty_query_has_no_hits() {
        let chart = OrgChart::new(northwind(), None);
        assert!(search_employees(&chart, "   ").is_empty());
    }

    #[test]
    fn finds_by_name_case_insensitively() {
        let chart = OrgChart::new(northwind(), None);
        let hits = search_employees(&chart, "helen park");
        assert_eq!(hits.first().map(|hit| hit.id.as_str()), Some("cfo"));
    }

    #[test]
    fn finds_collapsed_employees_by_department() {
        let chart = OrgChart::new(northwind(), None);
        let hits = search_employees(&chart, "Drilling Operations");
        assert!(hits.iter().any(|hit| hit.id == "dir-drilling"));
        assert!(hits.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn unmatched_query_is_empty() {
        let chart = OrgChart::new(northwind(), None);
        assert!(search_employees(&chart, "zzqxj").is_empty());
    }
}
