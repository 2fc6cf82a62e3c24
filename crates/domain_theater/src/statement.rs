//! Statement computation and rendering
//!
//! A statement is produced in two steps. `StatementPrinter::compute` prices
//! every performance and accumulates the totals into a `Statement`; the
//! statement is then rendered to text with a currency formatter. Either step
//! fails as a whole, so callers never see a partial statement.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::{instrument, warn};

use core_kernel::{Currency, CurrencyFormatter, Money, MoneyError};

use crate::catalog::PlayCatalog;
use crate::error::StatementError;
use crate::invoice::Invoice;
use crate::pricing::PricingPolicy;

/// A priced performance as it appears on a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_name: String,
    pub amount: Money,
    pub audience: u32,
}

/// The computed content of a billing statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount: Money,
    pub volume_credits: u64,
}

impl Statement {
    /// Renders the statement as plain text
    ///
    /// Every line, including the last, ends with a newline.
    pub fn render(&self, formatter: &CurrencyFormatter) -> Result<String, StatementError> {
        let amounts = self
            .lines
            .iter()
            .map(|line| formatter.format_money(&line.amount))
            .collect::<Result<Vec<_>, _>>()?;
        let total = formatter.format_money(&self.total_amount)?;

        // writing into a String cannot fail
        let mut text = String::new();
        let _ = writeln!(text, "Statement for {}", self.customer);
        for (line, amount) in self.lines.iter().zip(&amounts) {
            let _ = writeln!(text, "  {}: {} ({} seats)", line.play_name, amount, line.audience);
        }
        let _ = writeln!(text, "Amount owed is {}", total);
        let _ = writeln!(text, "You earned {} credits", self.volume_credits);

        Ok(text)
    }
}

/// Prices an invoice against a play table and prints its statement
///
/// The printer borrows both inputs; the returned text holds no references
/// to them.
#[derive(Debug, Clone)]
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    plays: &'a PlayCatalog,
    policy: PricingPolicy,
    formatter: CurrencyFormatter,
}

impl<'a> StatementPrinter<'a> {
    /// Creates a printer with the default policy and US dollar formatting
    pub fn new(invoice: &'a Invoice, plays: &'a PlayCatalog) -> Self {
        Self {
            invoice,
            plays,
            policy: PricingPolicy::default(),
            formatter: CurrencyFormatter::us_dollars(),
        }
    }

    /// Uses a different pricing policy
    pub fn with_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uses a different locale or currency
    pub fn with_formatter(mut self, formatter: CurrencyFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Prices against a different play table
    pub fn with_plays(mut self, plays: &'a PlayCatalog) -> Self {
        self.plays = plays;
        self
    }

    /// Returns the invoice being printed
    pub fn invoice(&self) -> &'a Invoice {
        self.invoice
    }

    /// Returns the play table in use
    pub fn plays(&self) -> &'a PlayCatalog {
        self.plays
    }

    /// Returns the pricing policy in use
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Prices every performance and accumulates totals
    #[instrument(
        skip(self),
        fields(customer = %self.invoice.customer, performances = self.invoice.performances.len())
    )]
    pub fn compute(&self) -> Result<Statement, StatementError> {
        let currency = self.formatter.currency();
        let mut total_amount = Money::zero(currency);
        let mut volume_credits: u64 = 0;
        let mut lines = Vec::with_capacity(self.invoice.performances.len());

        for performance in &self.invoice.performances {
            let play = self.plays.resolve(&performance.play_id).inspect_err(|_| {
                warn!(play_id = %performance.play_id, "Performance references an unknown play");
            })?;

            let charge = self.policy.charge(play.play_type, performance.audience)?;
            let amount = to_money(charge.amount_cents, currency)?;

            volume_credits = volume_credits
                .checked_add(charge.volume_credits)
                .ok_or(MoneyError::Overflow)?;
            total_amount = total_amount.checked_add(&amount)?;

            lines.push(StatementLine {
                play_name: play.name.clone(),
                amount,
                audience: performance.audience,
            });
        }

        Ok(Statement {
            customer: self.invoice.customer.clone(),
            lines,
            total_amount,
            volume_credits,
        })
    }

    /// Computes and renders the statement text
    pub fn statement(&self) -> Result<String, StatementError> {
        self.compute()?.render(&self.formatter)
    }
}

/// Renders the statement for an invoice with default pricing in US dollars
pub fn render_statement(invoice: &Invoice, plays: &PlayCatalog) -> Result<String, StatementError> {
    StatementPrinter::new(invoice, plays).statement()
}

fn to_money(minor_units: u64, currency: Currency) -> Result<Money, MoneyError> {
    let minor_units = i64::try_from(minor_units).map_err(|_| MoneyError::Overflow)?;
    Ok(Money::from_minor(minor_units, currency))
}
