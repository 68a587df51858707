pub mod portfolios;
pub mod quotes;
pub mod stocks;
pub mod users;
