//! SkillScope career analyzer library

pub mod catalog;
pub mod chart;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod report;

pub use config::Config;
pub use error::{Result, SkillScopeError};
