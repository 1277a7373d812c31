use crate::domain::entities::market_data::MarketData;
use crate::usecase::ports::provider::DatasetProvider;

pub struct SeedMarketData;

impl DatasetProvider<MarketData> for SeedMarketData {
    fn fetch(&self) -> Vec<MarketData> {
        market_data_rows()
    }
}

#[allow(clippy::too_many_arguments)]
fn quote(
    id: i64,
    thscode: &str,
    trade_date: &str,
    open: f64,
    close: f64,
    high: f64,
    low: f64,
    volume: i64,
    amount: f64,
    turnover_ratio: f64,
    pre_close: f64,
) -> MarketData {
    let change_amount = close - pre_close;
    let change_ratio = if pre_close == 0.0 {
        0.0
    } else {
        change_amount / pre_close * 100.0
    };
    MarketData {
        id,
        thscode: thscode.to_string(),
        trade_date: trade_date.to_string(),
        open,
        close,
        high,
        low,
        volume,
        amount,
        change_amount,
        change_ratio,
        turnover_ratio,
        pre_close,
        create_time: format!("{trade_date} 17:30:00"),
        update_time: format!("{trade_date} 17:30:00"),
    }
}

pub fn market_data_rows() -> Vec<MarketData> {
    vec![
        quote(1, "000001.SZ", "2024-01-02", 9.40, 9.52, 9.58, 9.35, 1_254_300, 11_902_340.0, 0.65, 9.38),
        quote(2, "000001.SZ", "2024-01-03", 9.52, 9.47, 9.60, 9.42, 1_102_800, 10_478_200.0, 0.57, 9.52),
        quote(3, "600519.SH", "2024-01-02", 1688.00, 1701.50, 1712.00, 1680.10, 28_400, 48_211_600.0, 0.23, 1690.20),
        quote(4, "600519.SH", "2024-01-03", 1701.50, 1695.00, 1708.80, 1688.00, 26_150, 44_392_500.0, 0.21, 1701.50),
        quote(5, "000858.SZ", "2024-01-02", 142.30, 145.10, 145.80, 141.60, 356_900, 51_389_600.0, 0.92, 142.00),
        quote(6, "000858.SZ", "2024-01-03", 145.10, 143.70, 146.20, 143.00, 301_200, 43_512_900.0, 0.78, 145.10),
        quote(7, "300750.SZ", "2024-01-02", 158.00, 161.20, 162.50, 157.30, 512_400, 82_033_700.0, 1.23, 158.40),
        quote(8, "300750.SZ", "2024-01-03", 161.20, 159.80, 163.00, 159.10, 467_800, 75_210_400.0, 1.12, 161.20),
        quote(9, "601318.SH", "2024-01-02", 41.60, 42.05, 42.30, 41.40, 2_013_500, 84_367_100.0, 1.11, 41.72),
        quote(10, "601318.SH", "2024-01-03", 42.05, 41.88, 42.40, 41.70, 1_876_200, 78_904_300.0, 1.03, 42.05),
        quote(11, "600036.SH", "2024-01-02", 29.10, 29.55, 29.72, 28.95, 1_432_700, 42_180_500.0, 0.57, 29.18),
        quote(12, "600036.SH", "2024-01-03", 29.55, 29.40, 29.80, 29.22, 1_298_400, 38_412_800.0, 0.52, 29.55),
        quote(13, "002594.SZ", "2024-01-02", 198.50, 202.30, 203.60, 197.80, 387_600, 77_906_300.0, 1.33, 198.90),
        quote(14, "688981.SH", "2024-01-02", 54.20, 53.65, 54.80, 53.30, 932_100, 50_302_700.0, 1.18, 54.30),
    ]
}
