pub mod convert;
pub mod forecast;
pub mod rates;
pub mod setup;
pub mod ui;
