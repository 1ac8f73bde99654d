//! deltarle: a delta transform followed by run-length encoding, with
//! unit-cost compression-ratio accounting.
//!
//! The crate provides:
//! - Forward transforms and their inverses (`transform`)
//! - Size metrics and the guarded compression ratio (`stats`)
//! - The end-to-end pipeline (`engine`)
//! - File-oriented input helpers (`io`)
//! - Text and JSON report rendering (`report`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use deltarle::engine::{self, Input};
//! use deltarle::transform::Run;
//!
//! let analysis = engine::analyze(Input::Log(vec![10, 10, 10, 20, 20, 5]));
//! assert_eq!(analysis.deltas(), &[10, 0, 0, 10, 0, -15]);
//! assert_eq!(analysis.runs()[1], Run::new(0, 2));
//! assert_eq!(analysis.metrics().compressed_size, 10);
//! assert_eq!(analysis.ratio(), 0.6);
//! assert!(analysis.verify().is_ok());
//! ```

pub mod engine;
pub mod io;
pub mod report;
pub mod stats;
pub mod transform;

#[cfg(feature = "cli")]
pub mod cli;
