pub mod portfolios;
pub mod quotes;
pub mod root;
pub mod stocks;
pub mod users;
