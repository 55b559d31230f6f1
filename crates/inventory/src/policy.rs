//! Pricing policy: every threshold and rate the evaluator uses.

use serde::{Deserialize, Serialize};

use freshstock_core::{DomainError, DomainResult};

use crate::status::BatchStatus;

/// One expiry-driven discount band.
///
/// A batch falls in the band when `days_to_expiry <= max_days_to_expiry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryTier {
    pub max_days_to_expiry: i64,
    pub discount_rate: f64,
    pub status: BatchStatus,
}

impl ExpiryTier {
    pub fn new(max_days_to_expiry: i64, discount_rate: f64, status: BatchStatus) -> Self {
        Self {
            max_days_to_expiry,
            discount_rate,
            status,
        }
    }
}

/// Pricing configuration passed explicitly to [`crate::evaluate`].
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Bands ordered by ascending `max_days_to_expiry`; the first match wins.
    pub expiry_tiers: Vec<ExpiryTier>,
    /// Slow-moving applies when days in store is strictly greater than this.
    pub slow_moving_min_days_in_store: i64,
    /// Slow-moving applies when the unsold ratio is strictly greater than this.
    pub slow_moving_min_unsold_ratio: f64,
    /// Added on top of the expiry tier rate for slow-moving batches.
    pub slow_moving_surcharge: f64,
    /// Ceiling for the combined discount rate.
    pub max_discount_rate: f64,
    /// A batch whose final price is at or below `price * ratio` is donated.
    pub donate_price_floor_ratio: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            expiry_tiers: vec![
                ExpiryTier::new(1, 0.70, BatchStatus::NearExpiry),
                ExpiryTier::new(3, 0.50, BatchStatus::HighDiscount),
                ExpiryTier::new(7, 0.30, BatchStatus::Discounted),
            ],
            slow_moving_min_days_in_store: 7,
            slow_moving_min_unsold_ratio: 0.6,
            slow_moving_surcharge: 0.10,
            max_discount_rate: 0.80,
            donate_price_floor_ratio: 0.2,
        }
    }
}

impl PricingPolicy {
    /// First tier whose bound covers `days_to_expiry`.
    pub fn tier_for(&self, days_to_expiry: i64) -> Option<&ExpiryTier> {
        self.expiry_tiers
            .iter()
            .find(|t| days_to_expiry <= t.max_days_to_expiry)
    }

    /// Reject policies that would break the evaluator's guarantees
    /// (rates outside [0, 1], tiers out of order, discount shrinking as
    /// expiry approaches).
    pub fn validate(&self) -> DomainResult<()> {
        let rates = [
            ("slow_moving_min_unsold_ratio", self.slow_moving_min_unsold_ratio),
            ("slow_moving_surcharge", self.slow_moving_surcharge),
            ("max_discount_rate", self.max_discount_rate),
            ("donate_price_floor_ratio", self.donate_price_floor_ratio),
        ];
        for (field, value) in rates {
            ensure_fraction(field, value)?;
        }

        for (i, tier) in self.expiry_tiers.iter().enumerate() {
            ensure_fraction("expiry_tiers.discount_rate", tier.discount_rate)?;
            if tier.discount_rate > self.max_discount_rate {
                return Err(DomainError::invalid_input(format!(
                    "pricing policy: expiry tier {i} rate {} exceeds max_discount_rate {}",
                    tier.discount_rate, self.max_discount_rate
                )));
            }
            if !tier.status.is_expiry_tier_status() {
                return Err(DomainError::invalid_input(format!(
                    "pricing policy: expiry tier {i} cannot assign status {}",
                    tier.status
                )));
            }
        }

        for (i, pair) in self.expiry_tiers.windows(2).enumerate() {
            let (closer, further) = (&pair[0], &pair[1]);
            if further.max_days_to_expiry <= closer.max_days_to_expiry {
                return Err(DomainError::invalid_input(format!(
                    "pricing policy: expiry tiers must be strictly ascending by max_days_to_expiry (tier {})",
                    i + 1
                )));
            }
            if further.discount_rate > closer.discount_rate {
                return Err(DomainError::invalid_input(format!(
                    "pricing policy: discount rate must not grow with days to expiry (tier {})",
                    i + 1
                )));
            }
        }

        Ok(())
    }
}

fn ensure_fraction(field: &str, value: f64) -> DomainResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::invalid_input(format!(
            "pricing policy: {field} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        PricingPolicy::default().validate().unwrap();
    }

    #[test]
    fn tier_lookup_is_first_match() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.tier_for(-4).unwrap().status, BatchStatus::NearExpiry);
        assert_eq!(policy.tier_for(1).unwrap().status, BatchStatus::NearExpiry);
        assert_eq!(policy.tier_for(2).unwrap().status, BatchStatus::HighDiscount);
        assert_eq!(policy.tier_for(7).unwrap().status, BatchStatus::Discounted);
        assert!(policy.tier_for(8).is_none());
    }

    #[test]
    fn rejects_rate_outside_unit_interval() {
        let policy = PricingPolicy {
            max_discount_rate: 1.2,
            ..PricingPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(DomainError::InvalidInput(_))));

        let policy = PricingPolicy {
            slow_moving_surcharge: f64::NAN,
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn rejects_unordered_tiers() {
        let mut policy = PricingPolicy::default();
        policy.expiry_tiers.swap(0, 1);
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn rejects_tiers_whose_rate_grows_further_from_expiry() {
        let policy = PricingPolicy {
            expiry_tiers: vec![
                ExpiryTier::new(1, 0.2, BatchStatus::NearExpiry),
                ExpiryTier::new(3, 0.5, BatchStatus::HighDiscount),
            ],
            ..PricingPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("must not grow"));
    }

    #[test]
    fn rejects_tier_above_ceiling() {
        let policy = PricingPolicy {
            max_discount_rate: 0.6,
            ..PricingPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds max_discount_rate"));
    }

    #[test]
    fn rejects_tier_assigning_override_status() {
        let policy = PricingPolicy {
            expiry_tiers: vec![ExpiryTier::new(1, 0.7, BatchStatus::Donate)],
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let policy: PricingPolicy =
            serde_json::from_value(serde_json::json!({ "max_discount_rate": 0.9 })).unwrap();
        assert_eq!(policy.max_discount_rate, 0.9);
        assert_eq!(policy.expiry_tiers, PricingPolicy::default().expiry_tiers);
        assert_eq!(policy.slow_moving_min_days_in_store, 7);
    }
}
