//! Custom Test Assertions
//!
//! Provides assertion helpers for statements that give more meaningful
//! failure messages than comparing whole structures.

use core_kernel::{Currency, Money};
use domain_theater::Statement;
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given number of cents
///
/// # Panics
///
/// Panics if the amount differs or the currency is not `currency`
pub fn assert_money_cents(actual: &Money, cents: i64, currency: Currency) {
    assert_eq!(
        actual.currency(),
        currency,
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        currency
    );
    assert_eq!(
        actual.amount(),
        Decimal::new(cents, currency.decimal_places()),
        "Amount mismatch: actual={}, expected {} minor units",
        actual,
        cents
    );
}

/// Asserts the totals of a computed statement
pub fn assert_statement_totals(statement: &Statement, total_cents: i64, volume_credits: u64) {
    assert_money_cents(
        &statement.total_amount,
        total_cents,
        statement.total_amount.currency(),
    );
    assert_eq!(
        statement.volume_credits, volume_credits,
        "Volume credits mismatch for {}",
        statement.customer
    );
}

/// Asserts that statement lines sum to the statement total
pub fn assert_lines_sum_to_total(statement: &Statement) {
    let sum = statement
        .lines
        .iter()
        .fold(Money::zero(statement.total_amount.currency()), |acc, line| acc + line.amount);
    assert_eq!(
        sum, statement.total_amount,
        "Lines sum to {} but total is {}",
        sum, statement.total_amount
    );
}

/// Asserts that rendered text contains each line in order
pub fn assert_lines_in_order(text: &str, expected: &[&str]) {
    let mut rest = text;
    for line in expected {
        match rest.find(line) {
            Some(pos) => rest = &rest[pos + line.len()..],
            None => panic!("Expected line {:?} (in order) in statement:\n{}", line, text),
        }
    }
}
