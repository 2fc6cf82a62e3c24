//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! theater billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built plays and invoices, including the BigCo scenario
//! - `builders`: Builder for invoices together with their play table
//! - `assertions`: Assertion helpers for statements and money
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
