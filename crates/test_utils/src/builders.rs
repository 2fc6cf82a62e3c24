//! Test Data Builders
//!
//! Builds an invoice and the play table it needs in one pass, so tests can
//! describe performances without keeping two structures in sync by hand.

use domain_theater::{Invoice, Performance, Play, PlayCatalog, PlayType};

/// Builder for an invoice together with its play table
pub struct TestInvoiceBuilder {
    invoice: Invoice,
    plays: PlayCatalog,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new("TestCo")
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder for the given customer
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            invoice: Invoice::new(customer),
            plays: PlayCatalog::new(),
        }
    }

    /// Adds a performance of a tragedy, registering the play
    pub fn tragedy(self, play_id: &str, name: &str, audience: u32) -> Self {
        self.performance(play_id, Play::tragedy(name), audience)
    }

    /// Adds a performance of a comedy, registering the play
    pub fn comedy(self, play_id: &str, name: &str, audience: u32) -> Self {
        self.performance(play_id, Play::comedy(name), audience)
    }

    /// Adds a performance of any play, registering the play
    pub fn performance(mut self, play_id: &str, play: Play, audience: u32) -> Self {
        self.plays.insert(play_id, play);
        self.invoice = self.invoice.with_performance(Performance::new(play_id, audience));
        self
    }

    /// Adds a performance whose play is deliberately left out of the table
    pub fn unlisted(mut self, play_id: &str, audience: u32) -> Self {
        self.invoice = self.invoice.with_performance(Performance::new(play_id, audience));
        self
    }

    /// Adds one performance per (type, audience) pair with generated ids
    pub fn performances(mut self, entries: &[(PlayType, u32)]) -> Self {
        for (index, (play_type, audience)) in entries.iter().enumerate() {
            let play_id = format!("play-{}", index);
            let play = Play::new(format!("Play {}", index), *play_type);
            self = self.performance(&play_id, play, *audience);
        }
        self
    }

    /// Returns the invoice and play table
    pub fn build(self) -> (Invoice, PlayCatalog) {
        (self.invoice, self.plays)
    }
}
