//! Strength tournament runner
//!
//! This crate provides infrastructure for:
//! - Running four-game tournaments between two rated players
//! - Recording each game's alpha-beta search tree for inspection
//! - Reporting and exporting the aggregated results
//!
//! # Usage
//!
//! ```bash
//! # Player A rated 20 maximizes first against player B rated 10
//! cargo run -p tournament -- --starting-role 0 --rating-a 20 --rating-b 10
//!
//! # Reproducible run exported as JSON for a tree renderer
//! cargo run -p tournament -- --config tournament.toml --seed 42 --output results.json
//! ```

mod config;
mod error;
mod results;
mod runner;

pub use config::*;
pub use error::*;
pub use results::*;
pub use runner::*;
