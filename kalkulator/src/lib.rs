pub mod adapter;
pub mod core;
pub mod estimate;
pub mod observability;
pub mod settings;
pub mod widget;

mod error;

pub use error::{Error, Result};
