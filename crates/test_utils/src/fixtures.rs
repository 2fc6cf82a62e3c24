//! Pre-built Test Fixtures
//!
//! Provides ready-to-use plays and invoices. The BigCo invoice is the
//! reference scenario whose totals are known by hand.

use core_kernel::{Currency, Money};
use domain_theater::{Invoice, Performance, Play, PlayCatalog};

/// Fixture for play tables
pub struct PlayFixtures;

impl PlayFixtures {
    /// Hamlet, As You Like It, and Othello
    pub fn shakespeare() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"))
    }

    /// The classic play data file, including the unknown "history" type
    pub fn json_with_unknown_type() -> &'static str {
        r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "henry-v": {"name": "Henry V", "type": "history"}
        }"#
    }

    /// The classic play data file
    pub fn shakespeare_json() -> &'static str {
        r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "as-like": {"name": "As You Like It", "type": "comedy"},
            "othello": {"name": "Othello", "type": "tragedy"}
        }"#
    }
}

/// Fixture for invoices
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// BigCo's invoice: Hamlet for 55, As You Like It for 35, Othello for 40
    pub fn big_co() -> Invoice {
        Invoice::new("BigCo")
            .with_performance(Performance::new("hamlet", 55))
            .with_performance(Performance::new("as-like", 35))
            .with_performance(Performance::new("othello", 40))
    }

    /// The BigCo invoice as JSON
    pub fn big_co_json() -> &'static str {
        r#"{
            "customer": "BigCo",
            "performances": [
                {"playID": "hamlet", "audience": 55},
                {"playID": "as-like", "audience": 35},
                {"playID": "othello", "audience": 40}
            ]
        }"#
    }

    /// Expected statement text for BigCo under default pricing
    pub fn big_co_statement() -> &'static str {
        "Statement for BigCo\n\
         \x20 Hamlet: $650.00 (55 seats)\n\
         \x20 As You Like It: $580.00 (35 seats)\n\
         \x20 Othello: $500.00 (40 seats)\n\
         Amount owed is $1,730.00\n\
         You earned 47 credits\n"
    }

    /// Expected BigCo total
    pub fn big_co_total() -> Money {
        Money::from_minor(173_000, Currency::USD)
    }

    /// Expected BigCo volume credits
    pub fn big_co_credits() -> u64 {
        47
    }
}
