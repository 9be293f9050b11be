//! Site configuration and static export.

mod builder;
mod config;

pub use builder::{build, BuildReport};
pub use config::*;
