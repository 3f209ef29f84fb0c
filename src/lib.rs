pub mod clv;
pub mod config;
pub mod error;
pub mod llm;
pub mod pagespeed;
pub mod sentiment;
pub mod server;

pub use error::{Error, Result};
