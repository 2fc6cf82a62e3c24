//! Performance pricing and volume credits
//!
//! All monetary values are integer minor units (cents) of the statement
//! currency. The policy is an immutable value: alternate rates are expressed
//! by constructing a different policy, never by mutating one in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{CoreError, MoneyError};

use crate::play::PlayType;

/// Amount and volume credits earned by a single performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Price in minor units
    pub amount_cents: u64,
    /// Loyalty credits earned
    pub volume_credits: u64,
}

/// Pricing rates and thresholds
///
/// Field names double as configuration keys; `from_env` reads them from
/// variables such as `PRICING_TRAGEDY_BASE_AMOUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Flat price of any tragedy
    pub tragedy_base_amount: u64,
    /// Seats included in the tragedy base price
    pub tragedy_audience_threshold: u32,
    /// Price per seat above the tragedy threshold
    pub tragedy_extra_amount_per_person: u64,
    /// Flat price of any comedy
    pub comedy_base_amount: u64,
    /// Seats included in the comedy base price
    pub comedy_audience_threshold: u32,
    /// Flat surcharge once a comedy exceeds its threshold
    pub comedy_over_base_capacity_amount: u64,
    /// Price per seat above the comedy threshold
    pub comedy_over_base_capacity_per_person: u64,
    /// Price per seat for every comedy seat
    pub comedy_amount_per_audience: u64,
    /// Seats that earn no volume credits
    pub base_volume_credit_threshold: u32,
    /// Comedies earn one extra credit per this many attendees
    pub comedy_extra_volume_factor: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tragedy_base_amount: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_extra_amount_per_person: 1_000,
            comedy_base_amount: 30_000,
            comedy_audience_threshold: 20,
            comedy_over_base_capacity_amount: 10_000,
            comedy_over_base_capacity_per_person: 500,
            comedy_amount_per_audience: 300,
            base_volume_credit_threshold: 30,
            comedy_extra_volume_factor: 5,
        }
    }
}

impl PricingPolicy {
    /// Loads the policy from `PRICING_*` environment variables
    ///
    /// Variables that are not set keep their default value.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_source(config::Environment::with_prefix("PRICING"))
    }

    /// Loads the policy from any configuration source layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, CoreError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let policy: Self = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the policy can price every audience
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.comedy_extra_volume_factor == 0 {
            return Err(CoreError::configuration(
                "comedy_extra_volume_factor must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Prices a performance of the given type
    pub fn amount_for(&self, play_type: PlayType, audience: u32) -> Result<u64, MoneyError> {
        let seats = u64::from(audience);

        let amount = match play_type {
            PlayType::Tragedy => {
                let mut amount = self.tragedy_base_amount;
                let threshold = u64::from(self.tragedy_audience_threshold);
                if seats > threshold {
                    amount = add(amount, mul(self.tragedy_extra_amount_per_person, seats - threshold)?)?;
                }
                amount
            }
            PlayType::Comedy => {
                let mut amount = self.comedy_base_amount;
                let threshold = u64::from(self.comedy_audience_threshold);
                if seats > threshold {
                    let over_capacity = add(
                        self.comedy_over_base_capacity_amount,
                        mul(self.comedy_over_base_capacity_per_person, seats - threshold)?,
                    )?;
                    amount = add(amount, over_capacity)?;
                }
                add(amount, mul(self.comedy_amount_per_audience, seats)?)?
            }
        };

        Ok(amount)
    }

    /// Volume credits earned by a performance of the given type
    pub fn volume_credits_for(&self, play_type: PlayType, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(self.base_volume_credit_threshold));
        match play_type {
            PlayType::Comedy => {
                // a zero factor is rejected by validate(); treat it as no bonus here
                let bonus = audience.checked_div(self.comedy_extra_volume_factor).unwrap_or(0);
                base + u64::from(bonus)
            }
            PlayType::Tragedy => base,
        }
    }

    /// Prices a performance and computes its credits
    pub fn charge(&self, play_type: PlayType, audience: u32) -> Result<Charge, MoneyError> {
        let charge = Charge {
            amount_cents: self.amount_for(play_type, audience)?,
            volume_credits: self.volume_credits_for(play_type, audience),
        };
        debug!(
            play_type = %play_type,
            audience,
            amount_cents = charge.amount_cents,
            volume_credits = charge.volume_credits,
            "Priced performance"
        );
        Ok(charge)
    }
}

fn add(a: u64, b: u64) -> Result<u64, MoneyError> {
    a.checked_add(b).ok_or(MoneyError::Overflow)
}

fn mul(rate: u64, seats: u64) -> Result<u64, MoneyError> {
    rate.checked_mul(seats).ok_or(MoneyError::Overflow)
}
