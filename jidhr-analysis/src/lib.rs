//! Text analysis on top of the ISRI root extractor.
//!
//! Provides the host-facing pieces around [`jidhr_stem`]:
//! - A token filter and its parameter-driven factory
//! - An Arabic analyzer with configurable length limits
//! - JSON-backed analyzer configuration

mod arabic;
mod error;
mod filter;
mod traits;

pub use arabic::IsriAnalyzer;
pub use error::{AnalysisError, Result};
pub use filter::{StemFilter, StemFilterFactory, Token};
pub use traits::{Analyzer, AnalyzerConfig};
