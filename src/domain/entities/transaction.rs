use crate::domain::grid::filter::{FieldLookup, ALL_SENTINEL};

/// One simulated trade record. The amplitude columns shown in the table are
/// derived per row from the metrics calculator, not stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionData {
    pub id: i64,
    pub thscode: String,
    pub trade_date: String,
    pub pre_close: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    pub status: String,
    pub create_time: String,
    pub update_time: String,
}

impl FieldLookup for TransactionData {
    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "thscode" => Some(self.thscode.clone()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

/// Distinct trade statuses in first-seen order, with the "all" sentinel in
/// front so the list can feed a select box directly.
pub fn unique_statuses(rows: &[TransactionData]) -> Vec<String> {
    let mut statuses = vec![ALL_SENTINEL.to_string()];
    for row in rows {
        if !statuses.contains(&row.status) {
            statuses.push(row.status.clone());
        }
    }
    statuses
}
