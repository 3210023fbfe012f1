pub mod convert;
pub mod quote;
pub mod setup;
pub mod token;
pub mod ui;
