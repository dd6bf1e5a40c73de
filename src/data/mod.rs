pub mod series;

pub use series::PriceSeries;
