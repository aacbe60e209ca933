//! SeoLens Library
//!
//! This crate validates HTML documents against a configurable set of
//! structural rules (every `<img>` has an `alt`, at most one `<h1>`, ...)
//! and produces an ordered list of warnings.
//!
//! ```rust
//! use std::sync::Arc;
//! use seolens::config::Config;
//! use seolens::rules::ValidationEngine;
//!
//! let mut engine = ValidationEngine::new(Arc::new(Config::default()));
//! engine.include_rules([1u32, 5]);
//!
//! let report = engine
//!     .validate("<body><h1>a</h1><h1>b</h1><img src=\"x.png\"></body>")
//!     .unwrap();
//! assert_eq!(report.count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod rules;

pub use error::SeoLensError;
