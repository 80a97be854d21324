pub mod currencies;
pub mod serve;
