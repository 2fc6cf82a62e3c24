//! Theater Billing Domain
//!
//! This crate prices the performances on a customer invoice and renders the
//! resulting billing statement.
//!
//! # Pricing
//!
//! Each performance is priced from its play type and audience size:
//! - **Tragedy**: a base amount plus a per-seat surcharge above a threshold
//! - **Comedy**: a base amount, a flat over-capacity charge plus per-seat
//!   surcharge above a threshold, and a per-seat charge for every seat
//!
//! Every performance also earns volume credits for seats above a threshold,
//! and comedies earn an extra credit for every few attendees.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_theater::{render_statement, Invoice, Performance, Play, PlayCatalog};
//!
//! let plays = PlayCatalog::new()
//!     .with_play("hamlet", Play::tragedy("Hamlet"))
//!     .with_play("as-like", Play::comedy("As You Like It"));
//!
//! let invoice = Invoice::new("BigCo")
//!     .with_performance(Performance::new("hamlet", 55))
//!     .with_performance(Performance::new("as-like", 35));
//!
//! let text = render_statement(&invoice, &plays)?;
//! ```

pub mod play;
pub mod invoice;
pub mod catalog;
pub mod pricing;
pub mod statement;
pub mod error;

pub use play::{Play, PlayType};
pub use invoice::{Invoice, Performance};
pub use catalog::PlayCatalog;
pub use pricing::{Charge, PricingPolicy};
pub use statement::{render_statement, Statement, StatementLine, StatementPrinter};
pub use error::StatementError;
