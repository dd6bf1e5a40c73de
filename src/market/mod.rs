pub mod nobitex;

pub use nobitex::MarketClient;
