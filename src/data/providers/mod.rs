pub mod finnhub;
pub mod fred;
