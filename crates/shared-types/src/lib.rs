pub mod error;

// Purchase order domain
pub mod catalog;
pub mod config;
pub mod form;
pub mod purchase_order;
pub mod validation;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use form::*;
pub use purchase_order::*;
pub use validation::*;
