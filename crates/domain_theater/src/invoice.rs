//! Customer invoices
//!
//! An invoice lists the performances staged for one customer. The order of
//! performances is significant: statement lines follow it exactly.

use serde::{Deserialize, Serialize};

use core_kernel::PlayId;

/// One staging of a play for an audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Key into the play table
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    /// Number of seats occupied
    pub audience: u32,
}

impl Performance {
    /// Creates a performance
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// An invoice of performances for a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer name as printed on the statement
    pub customer: String,
    /// Performances in billing order
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates an invoice with no performances
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Appends a performance
    pub fn with_performance(mut self, performance: Performance) -> Self {
        self.performances.push(performance);
        self
    }
}
