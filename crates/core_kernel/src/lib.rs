//! Core Kernel - Foundational types and utilities for theater billing
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money types with precise decimal arithmetic
//! - Locale-aware currency formatting
//! - Strongly-typed identifiers

pub mod money;
pub mod format;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use format::{CurrencyFormatter, NumberConventions, SymbolPosition};
pub use identifiers::PlayId;
pub use error::CoreError;
