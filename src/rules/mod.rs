//! Rules module - Rule evaluation engine

pub mod constants;
pub mod document;
pub mod engine;
pub mod evaluator;
pub mod predicates;
pub mod results;
pub mod template;
pub mod toggles;

pub use engine::ValidationEngine;
pub use predicates::Check;
pub use results::WarningReport;
