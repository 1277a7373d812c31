use crate::domain::grid::filter::{FieldLookup, ALL_SENTINEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapLevel {
    Large,
    Mid,
    Small,
}

impl CapLevel {
    pub fn label(self) -> &'static str {
        match self {
            CapLevel::Large => "大市值",
            CapLevel::Mid => "中市值",
            CapLevel::Small => "小市值",
        }
    }
}

/// Long-term classification tag for one stock.
#[derive(Debug, Clone, PartialEq)]
pub struct StockTag {
    pub thscode: String,
    pub stock_name: String,
    pub cap_level: CapLevel,
    pub market_cap: f64,
    pub sector: String,
    pub update_time: String,
}

impl FieldLookup for StockTag {
    fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "thscode" => Some(self.thscode.clone()),
            "sector" => Some(self.sector.clone()),
            _ => None,
        }
    }
}

/// Distinct sectors in first-seen order, "all" sentinel first.
pub fn unique_sectors(rows: &[StockTag]) -> Vec<String> {
    let mut sectors = vec![ALL_SENTINEL.to_string()];
    for row in rows {
        if !sectors.contains(&row.sector) {
            sectors.push(row.sector.clone());
        }
    }
    sectors
}
