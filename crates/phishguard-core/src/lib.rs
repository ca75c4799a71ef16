//! PhishGuard core: classify a URL as phishing or safe from lexical features.
//!
//! The pipeline is [`features::extract`] (URL to a 31-slot vector), shaping
//! into a named [`features::FeatureFrame`], and a pre-trained
//! [`classifier::Classifier`]. [`analyze::Analyzer`] ties them together and
//! reports every failure as a typed [`analyze::AnalysisError`].
//!
//! Uses structured logging via [`tracing`]; set `RUST_LOG` to control
//! verbosity (e.g. `RUST_LOG=phishguard_core=trace`).

pub mod analyze;
pub mod checksum;
pub mod classifier;
pub mod config;
pub mod features;
pub mod logging;
pub mod url_model;

pub use analyze::{AnalysisError, Analyzer, Outcome, Verdict};
pub use features::{extract, FeatureVector};
