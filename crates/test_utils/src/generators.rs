//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating plays, audiences, and
//! invoices that respect domain invariants.

use domain_theater::{Invoice, PlayCatalog, PlayType};
use proptest::prelude::*;

use crate::builders::TestInvoiceBuilder;

/// Strategy for generating play types
pub fn play_type_strategy() -> impl Strategy<Value = PlayType> {
    prop_oneof![Just(PlayType::Tragedy), Just(PlayType::Comedy)]
}

/// Strategy for generating realistic audience sizes
pub fn audience_strategy() -> impl Strategy<Value = u32> {
    0u32..5_000u32
}

/// Strategy for generating a single priced performance
pub fn performance_entry_strategy() -> impl Strategy<Value = (PlayType, u32)> {
    (play_type_strategy(), audience_strategy())
}

/// Strategy for generating an invoice with a matching play table
pub fn invoice_with_plays_strategy() -> impl Strategy<Value = (Invoice, PlayCatalog)> {
    prop::collection::vec(performance_entry_strategy(), 0..20).prop_map(|entries| {
        TestInvoiceBuilder::new("PropCo")
            .performances(&entries)
            .build()
    })
}
