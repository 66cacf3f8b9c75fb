pub mod allowlist;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod io;
pub mod paths;
pub mod render;
pub mod tiers;
pub mod types;

pub use error::{Result, SkillgateError};
