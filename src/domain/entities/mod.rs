pub mod market_data;
pub mod tags;
pub mod transaction;
