//! Tests for statement computation and rendering

use core_kernel::{Currency, CurrencyFormatter};
use domain_theater::{
    render_statement, Invoice, PlayCatalog, PlayType, PricingPolicy, StatementError,
    StatementPrinter,
};
use test_utils::{
    assert_lines_in_order, assert_lines_sum_to_total, assert_money_cents,
    assert_statement_totals, InvoiceFixtures, PlayFixtures, TestInvoiceBuilder,
};

// ============================================================================
// Reference Scenario
// ============================================================================

mod big_co {
    use super::*;

    #[test]
    fn test_statement_text_matches_reference() {
        let text = render_statement(&InvoiceFixtures::big_co(), &PlayFixtures::shakespeare()).unwrap();

        assert_eq!(text, InvoiceFixtures::big_co_statement());
    }

    #[test]
    fn test_computed_lines_and_totals() {
        let invoice = InvoiceFixtures::big_co();
        let plays = PlayFixtures::shakespeare();
        let statement = StatementPrinter::new(&invoice, &plays).compute().unwrap();

        assert_eq!(statement.customer, "BigCo");
        assert_eq!(statement.lines.len(), 3);
        assert_money_cents(&statement.lines[0].amount, 65_000, Currency::USD);
        assert_money_cents(&statement.lines[1].amount, 58_000, Currency::USD);
        assert_money_cents(&statement.lines[2].amount, 50_000, Currency::USD);
        assert_eq!(statement.total_amount, InvoiceFixtures::big_co_total());
        assert_eq!(statement.volume_credits, InvoiceFixtures::big_co_credits());
        assert_lines_sum_to_total(&statement);
    }

    #[test]
    fn test_lines_follow_invoice_order() {
        let text = render_statement(&InvoiceFixtures::big_co(), &PlayFixtures::shakespeare()).unwrap();

        assert_lines_in_order(
            &text,
            &[
                "Statement for BigCo",
                "Hamlet",
                "As You Like It",
                "Othello",
                "Amount owed is",
                "You earned",
            ],
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let invoice = InvoiceFixtures::big_co();
        let plays = PlayFixtures::shakespeare();

        let first = render_statement(&invoice, &plays).unwrap();
        let second = render_statement(&invoice, &plays).unwrap();

        assert_eq!(first, second);
        assert_eq!(invoice, InvoiceFixtures::big_co());
        assert_eq!(plays, PlayFixtures::shakespeare());
    }

    #[test]
    fn test_printer_exposes_inputs() {
        let invoice = InvoiceFixtures::big_co();
        let plays = PlayFixtures::shakespeare();
        let printer = StatementPrinter::new(&invoice, &plays);

        assert_eq!(printer.invoice().customer, "BigCo");
        assert_eq!(printer.plays().len(), 3);
        assert_eq!(printer.policy(), &PricingPolicy::default());
    }
}

// ============================================================================
// JSON Input
// ============================================================================

mod json_input {
    use super::*;

    #[test]
    fn test_statement_from_json_data() {
        let invoice: Invoice = serde_json::from_str(InvoiceFixtures::big_co_json()).unwrap();
        let plays: PlayCatalog = serde_json::from_str(PlayFixtures::shakespeare_json()).unwrap();

        let text = render_statement(&invoice, &plays).unwrap();
        assert_eq!(text, InvoiceFixtures::big_co_statement());
    }

    #[test]
    fn test_unknown_play_type_produces_no_statement() {
        let result = serde_json::from_str::<PlayCatalog>(PlayFixtures::json_with_unknown_type());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("unknown type: history"));
    }

    #[test]
    fn test_play_type_serializes_lowercase() {
        let json = serde_json::to_string(&PlayType::Comedy).unwrap();
        assert_eq!(json, "\"comedy\"");
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn test_unresolved_play_id() {
        let (invoice, plays) = TestInvoiceBuilder::new("BigCo")
            .tragedy("hamlet", "Hamlet", 55)
            .unlisted("macbeth", 20)
            .build();

        let result = render_statement(&invoice, &plays);

        match result {
            Err(StatementError::UnresolvedPlayId(id)) => assert_eq!(id.as_str(), "macbeth"),
            other => panic!("Expected UnresolvedPlayId, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_name_is_rejected_before_pricing() {
        let err = "pastoral".parse::<PlayType>().unwrap_err();

        assert!(matches!(err, StatementError::UnknownPlayType(ref t) if t == "pastoral"));
    }

    #[test]
    fn test_overflowing_policy_aborts_statement() {
        let (invoice, plays) = TestInvoiceBuilder::default()
            .tragedy("hamlet", "Hamlet", 100)
            .build();
        let policy = PricingPolicy {
            tragedy_extra_amount_per_person: u64::MAX / 2,
            ..PricingPolicy::default()
        };

        let result = StatementPrinter::new(&invoice, &plays)
            .with_policy(policy)
            .statement();

        assert!(matches!(result, Err(StatementError::Money(_))));
    }
}

// ============================================================================
// Policy and Locale
// ============================================================================

mod customization {
    use super::*;

    #[test]
    fn test_alternate_policy_changes_prices() {
        let invoice = InvoiceFixtures::big_co();
        let plays = PlayFixtures::shakespeare();
        let policy = PricingPolicy {
            tragedy_base_amount: 50_000,
            ..PricingPolicy::default()
        };

        let statement = StatementPrinter::new(&invoice, &plays)
            .with_policy(policy)
            .compute()
            .unwrap();

        // two tragedies each cost $100 more
        assert_statement_totals(&statement, 193_000, 47);
    }

    #[test]
    fn test_german_euro_statement() {
        let invoice = InvoiceFixtures::big_co();
        let plays = PlayFixtures::shakespeare();
        let formatter = CurrencyFormatter::from_tag("de-DE", Currency::EUR).unwrap();

        let text = StatementPrinter::new(&invoice, &plays)
            .with_formatter(formatter)
            .statement()
            .unwrap();

        assert!(text.contains("  Hamlet: 650,00 € (55 seats)\n"));
        assert!(text.contains("Amount owed is 1.730,00 €\n"));
    }

    #[test]
    fn test_empty_invoice() {
        let (invoice, plays) = TestInvoiceBuilder::new("Quiet Co").build();

        let statement = StatementPrinter::new(&invoice, &plays).compute().unwrap();

        assert!(statement.lines.is_empty());
        assert_statement_totals(&statement, 0, 0);
    }
}
