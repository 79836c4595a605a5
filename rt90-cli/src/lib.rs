//! # rt90-cli
//!
//! Conversion d'une coordonnée RT90 vers WGS84 en ligne de commande.
//!
//! ## Usage CLI
//!
//! ```bash
//! rt90-convert 6791723 1405053
//! rt90-convert --coord "7118097,1575237" --format geojson
//! RT90_PRECISION=8 rt90-convert 6791723 1405053 --format json
//! ```

pub mod cli;
pub mod config;
pub mod output;

pub use config::{OutputConfig, OutputFormat};
