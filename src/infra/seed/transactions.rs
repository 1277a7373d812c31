use crate::domain::entities::transaction::TransactionData;
use crate::usecase::ports::provider::DatasetProvider;

pub struct SeedTransactions;

impl DatasetProvider<TransactionData> for SeedTransactions {
    fn fetch(&self) -> Vec<TransactionData> {
        transaction_rows()
    }
}

#[allow(clippy::too_many_arguments)]
fn trade(
    id: i64,
    thscode: &str,
    trade_date: &str,
    pre_close: f64,
    high: f64,
    low: f64,
    open: f64,
    close: f64,
    status: &str,
) -> TransactionData {
    TransactionData {
        id,
        thscode: thscode.to_string(),
        trade_date: trade_date.to_string(),
        pre_close,
        high,
        low,
        open,
        close,
        status: status.to_string(),
        create_time: format!("{trade_date} 15:05:00"),
        update_time: format!("{trade_date} 15:05:00"),
    }
}

pub fn transaction_rows() -> Vec<TransactionData> {
    vec![
        trade(1, "000001.SZ", "2024-01-02", 9.38, 9.58, 9.35, 9.40, 9.52, "持仓中"),
        trade(2, "000001.SZ", "2024-01-03", 9.52, 9.60, 9.42, 9.52, 9.47, "持仓中"),
        trade(3, "000001.SZ", "2024-01-04", 9.47, 9.74, 9.45, 9.48, 9.70, "止盈"),
        trade(4, "000001.SZ", "2024-01-05", 9.70, 9.72, 9.31, 9.69, 9.35, "止损"),
        trade(5, "600519.SH", "2024-01-02", 1690.20, 1712.00, 1680.10, 1688.00, 1701.50, "持仓中"),
        trade(6, "600519.SH", "2024-01-03", 1701.50, 1708.80, 1688.00, 1701.50, 1695.00, "持仓中"),
        trade(7, "600519.SH", "2024-01-04", 1695.00, 1721.30, 1693.50, 1696.00, 1718.90, "止盈"),
        trade(8, "000858.SZ", "2024-01-02", 142.00, 145.80, 141.60, 142.30, 145.10, "持仓中"),
        trade(9, "000858.SZ", "2024-01-03", 145.10, 146.20, 143.00, 145.10, 143.70, "持仓中"),
        trade(10, "000858.SZ", "2024-01-04", 143.70, 144.00, 138.90, 143.50, 139.20, "强制平仓"),
        trade(11, "300750.SZ", "2024-01-02", 158.40, 162.50, 157.30, 158.00, 161.20, "持仓中"),
        trade(12, "300750.SZ", "2024-01-03", 161.20, 163.00, 159.10, 161.20, 159.80, "持仓中"),
        trade(13, "300750.SZ", "2024-01-04", 159.80, 165.40, 159.50, 160.00, 164.80, "止盈"),
        trade(14, "601318.SH", "2024-01-02", 41.72, 42.30, 41.40, 41.60, 42.05, "持仓中"),
        trade(15, "601318.SH", "2024-01-03", 42.05, 42.40, 41.70, 42.05, 41.88, "持仓中"),
        trade(16, "601318.SH", "2024-01-04", 41.88, 41.95, 40.60, 41.80, 40.75, "止损"),
        trade(17, "600036.SH", "2024-01-02", 29.18, 29.72, 28.95, 29.10, 29.55, "持仓中"),
        trade(18, "600036.SH", "2024-01-03", 29.55, 29.80, 29.22, 29.55, 29.40, "持仓中"),
        trade(19, "002594.SZ", "2024-01-02", 198.90, 203.60, 197.80, 198.50, 202.30, "持仓中"),
        trade(20, "002594.SZ", "2024-01-03", 202.30, 204.10, 195.70, 202.00, 196.40, "强制平仓"),
        trade(21, "688981.SH", "2024-01-02", 54.30, 54.80, 53.30, 54.20, 53.65, "持仓中"),
        trade(22, "688981.SH", "2024-01-03", 53.65, 54.10, 52.90, 53.65, 53.20, "止损"),
        // 新股上市首日没有昨收价，振幅列按占位符渲染
        trade(23, "301999.SZ", "2024-01-03", 0.0, 25.60, 21.10, 21.50, 24.90, "持仓中"),
    ]
}
