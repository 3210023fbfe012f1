pub mod fcsapi;

pub use fcsapi::{Candle, ConversionError, FcsApiClient};
