use crate::domain::entities::tags::{CapLevel, StockTag};
use crate::usecase::ports::provider::DatasetProvider;

pub struct SeedStockTags;

impl DatasetProvider<StockTag> for SeedStockTags {
    fn fetch(&self) -> Vec<StockTag> {
        stock_tag_rows()
    }
}

fn tag(thscode: &str, stock_name: &str, cap_level: CapLevel, market_cap: f64, sector: &str) -> StockTag {
    StockTag {
        thscode: thscode.to_string(),
        stock_name: stock_name.to_string(),
        cap_level,
        market_cap,
        sector: sector.to_string(),
        update_time: "2024-01-05 09:00:00".to_string(),
    }
}

pub fn stock_tag_rows() -> Vec<StockTag> {
    vec![
        tag("000001.SZ", "平安银行", CapLevel::Large, 268_000_000_000.0, "银行"),
        tag("600036.SH", "招商银行", CapLevel::Large, 742_000_000_000.0, "银行"),
        tag("600519.SH", "贵州茅台", CapLevel::Large, 2_137_000_000_000.0, "白酒"),
        tag("000858.SZ", "五粮液", CapLevel::Large, 563_000_000_000.0, "白酒"),
        tag("300750.SZ", "宁德时代", CapLevel::Large, 709_000_000_000.0, "新能源"),
        tag("002594.SZ", "比亚迪", CapLevel::Large, 589_000_000_000.0, "新能源"),
        tag("601318.SH", "中国平安", CapLevel::Large, 763_000_000_000.0, "保险"),
        tag("688981.SH", "中芯国际", CapLevel::Mid, 430_000_000_000.0, "半导体"),
        tag("603986.SH", "兆易创新", CapLevel::Mid, 57_000_000_000.0, "半导体"),
        tag("300014.SZ", "亿纬锂能", CapLevel::Mid, 82_000_000_000.0, "新能源"),
        tag("002475.SZ", "立讯精密", CapLevel::Mid, 231_000_000_000.0, "消费电子"),
        tag("300661.SZ", "圣邦股份", CapLevel::Small, 28_000_000_000.0, "半导体"),
    ]
}
