//! Core abstractions shared by the providers and the command line

pub mod config;
pub mod currency;
pub mod log;

pub use currency::CurrencyConverter;
