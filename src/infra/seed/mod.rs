pub mod market_data;
pub mod tags;
pub mod transactions;

pub use market_data::{market_data_rows, SeedMarketData};
pub use tags::{stock_tag_rows, SeedStockTags};
pub use transactions::{transaction_rows, SeedTransactions};
