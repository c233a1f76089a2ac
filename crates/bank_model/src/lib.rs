//! Bank Model - Question bank data model and export job types
//!
//! This crate provides the data model for the question bank report:
//! question and answer records as materialized by the hosting platform,
//! the per-request export job, row expansion shared by the flat and
//! tabular exporters, category grouping and final-exam sampling for the
//! document exporter, output filename stamping, and the locale string
//! tables.

mod question;
mod job;
mod rows;
mod grouping;
mod sampling;
mod filename;
mod locale;

pub use question::*;
pub use job::*;
pub use rows::*;
pub use grouping::*;
pub use sampling::*;
pub use filename::*;
pub use locale::*;
