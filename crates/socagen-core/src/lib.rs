//! socagen-core — assessment scoring and SOCA report assembly.
//!
//! This crate defines the questionnaire data model, the weighted response
//! scorer, the SOCA prompt builder, and the report assembler that ties
//! them to an injected text-generation backend.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod scorer;
pub mod store;
pub mod traits;
