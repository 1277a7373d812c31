use std::collections::BTreeMap;

use crate::domain::grid::pagination::Paginator;

/// Sentinel select-box value meaning "no restriction on this field".
pub const ALL_SENTINEL: &str = "all";

/// Seam between the filter machinery and concrete record types: a record
/// exposes the text of its filterable fields and nothing else.
pub trait FieldLookup {
    fn field_text(&self, field: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-insensitive substring containment, for free-text fields.
    Contains(String),
    /// Exact equality, for categorical and date fields.
    Equals(String),
}

impl MatchRule {
    pub fn value(&self) -> &str {
        match self {
            MatchRule::Contains(term) | MatchRule::Equals(term) => term,
        }
    }

    fn is_active(&self) -> bool {
        let term = self.value();
        !term.is_empty() && term != ALL_SENTINEL
    }

    pub(crate) fn matches(&self, candidate: &str) -> bool {
        match self {
            MatchRule::Contains(term) => candidate
                .to_lowercase()
                .contains(&term.to_lowercase()),
            MatchRule::Equals(term) => candidate == term,
        }
    }
}

pub type Criteria = BTreeMap<String, MatchRule>;

/// Owns the pending (bound to input controls) and committed (applied to the
/// active query) criteria sets. The filtered view is always computed from
/// committed criteria only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCoordinator {
    pending: Criteria,
    committed: Criteria,
}

impl FilterCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the pending rule for one field. Last write wins.
    pub fn edit(&mut self, field: &str, rule: MatchRule) {
        self.pending.insert(field.to_string(), rule);
    }

    pub fn pending_value(&self, field: &str) -> &str {
        self.pending.get(field).map(MatchRule::value).unwrap_or("")
    }

    pub fn committed_value(&self, field: &str) -> &str {
        self.committed
            .get(field)
            .map(MatchRule::value)
            .unwrap_or("")
    }

    /// Applies pending criteria and forces the paginator back to page 1 as one
    /// composite step. The reset happens on every commit, even when the
    /// filtered row count does not change.
    pub fn commit_and_reset(&mut self, paginator: &mut Paginator) {
        self.committed = self.pending.clone();
        paginator.reset();
    }

    /// Clears both criteria sets and returns to page 1.
    pub fn reset(&mut self, paginator: &mut Paginator) {
        self.pending.clear();
        self.committed.clear();
        paginator.reset();
    }

    /// Conjunction of all active committed criteria. A record missing a
    /// criterion field does not match.
    pub fn record_matches<R: FieldLookup>(&self, record: &R) -> bool {
        self.committed
            .iter()
            .filter(|(_, rule)| rule.is_active())
            .all(|(field, rule)| {
                record
                    .field_text(field)
                    .map(|text| rule.matches(&text))
                    .unwrap_or(false)
            })
    }

    pub fn filtered_view<R: FieldLookup + Clone>(&self, dataset: &[R]) -> Vec<R> {
        dataset
            .iter()
            .filter(|record| self.record_matches(*record))
            .cloned()
            .collect()
    }
}
