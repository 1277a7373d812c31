use crate::domain::grid::filter::FieldLookup;

/// One row of the market quote reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    pub id: i64,
    pub thscode: String,
    pub trade_date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: i64,
    pub amount: f64,
    pub change_amount: f64,
    pub change_ratio: f64,
    pub turnover_ratio: f64,
    pub pre_close: f64,
    pub create_time: String,
    pub update_time: String,
}

impl FieldLookup for MarketData {
    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "thscode" => Some(self.thscode.clone()),
            "trade_date" => Some(self.trade_date.clone()),
            _ => None,
        }
    }
}
