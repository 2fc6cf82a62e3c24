//! Tests for loading the pricing policy from `PRICING_*` environment variables
//!
//! Kept in its own test binary with a single test so no other test observes
//! the process environment while it is modified.

use core_kernel::CoreError;
use domain_theater::PricingPolicy;
use std::env;

const BASE_AMOUNT: &str = "PRICING_TRAGEDY_BASE_AMOUNT";
const VOLUME_FACTOR: &str = "PRICING_COMEDY_EXTRA_VOLUME_FACTOR";

#[test]
fn test_environment_overrides_and_validation() {
    env::remove_var(VOLUME_FACTOR);
    env::set_var(BASE_AMOUNT, "45000");

    let policy = PricingPolicy::from_env().unwrap();
    assert_eq!(policy.tragedy_base_amount, 45_000);
    assert_eq!(
        policy.comedy_extra_volume_factor,
        PricingPolicy::default().comedy_extra_volume_factor
    );

    env::set_var(VOLUME_FACTOR, "0");
    let result = PricingPolicy::from_env();

    env::remove_var(BASE_AMOUNT);
    env::remove_var(VOLUME_FACTOR);

    match result {
        Err(CoreError::Configuration(msg)) => assert!(msg.contains("comedy_extra_volume_factor")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}
