//! Stock intelligence: freshness classification, discount and routing.
//!
//! Rules run in a fixed order:
//! 1. days to expiry / days in store (ceiling of whole days)
//! 2. unsold ratio (0 when nothing was received)
//! 3. expiry tier (first matching band sets the base rate and status)
//! 4. slow-moving surcharge (adds to the rate, claims "Slow Moving")
//! 5. clamp to the policy ceiling
//! 6. final price and market value
//! 7. disposal override ("Donate" / NGO) when expired or priced near zero
//!
//! Status is resolved from the claims made by each rule using [`RuleKind`]
//! precedence, so a later rule always overrides an earlier one.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::batch::StockBatch;
use crate::policy::PricingPolicy;
use crate::status::{BatchStatus, Route};

const MS_PER_DAY: i64 = 86_400_000;
const NS_PER_DAY: i64 = 86_400_000_000_000;

/// Rates are kept to this many decimal places so additive surcharges
/// (0.7 + 0.1) land on the intended value.
const RATE_SCALE: f64 = 1_000_000.0;

/// Discounted prices are snapped to this many decimal places before the
/// half-up step, so a product that is exactly `x.5` in decimal rounds up.
const PRICE_SNAP: f64 = 1_000_000_000.0;

/// Above this magnitude `f64` can no longer carry nine decimals; no snapping.
const PRICE_SNAP_LIMIT: f64 = 1_000_000.0;

/// Status-setting rules, in ascending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ExpiryTier,
    SlowMoving,
    Disposal,
}

#[derive(Debug, Clone, Copy)]
struct StatusClaim {
    rule: RuleKind,
    status: BatchStatus,
}

/// Derived view of a batch at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockIntelligence {
    pub days_to_expiry: i64,
    pub days_in_store: i64,
    pub unsold_ratio: f64,
    pub discount_rate: f64,
    pub final_price: i64,
    pub market_value: i64,
    pub status: BatchStatus,
    pub route: Route,
    /// Rules that claimed a status, in precedence order.
    pub applied_rules: Vec<RuleKind>,
}

/// Evaluate `batch` as of `now`.
///
/// Pure and total: defined for any field values, including unvalidated ones.
pub fn evaluate(batch: &StockBatch, now: DateTime<Utc>, policy: &PricingPolicy) -> StockIntelligence {
    let days_to_expiry = ceil_days(batch.expiry_date - now);
    let days_in_store = ceil_days(now - batch.arrival_date);

    let unsold_ratio = if batch.total_stock > 0 {
        batch.current_stock as f64 / batch.total_stock as f64
    } else {
        0.0
    };

    let mut claims: Vec<StatusClaim> = Vec::with_capacity(3);
    let mut discount_rate = 0.0;

    if let Some(tier) = policy.tier_for(days_to_expiry) {
        discount_rate = tier.discount_rate;
        claims.push(StatusClaim {
            rule: RuleKind::ExpiryTier,
            status: tier.status,
        });
    }

    if days_in_store > policy.slow_moving_min_days_in_store
        && unsold_ratio > policy.slow_moving_min_unsold_ratio
    {
        discount_rate += policy.slow_moving_surcharge;
        claims.push(StatusClaim {
            rule: RuleKind::SlowMoving,
            status: BatchStatus::SlowMoving,
        });
    }

    let discount_rate = normalize_rate(discount_rate.min(policy.max_discount_rate));

    let final_price = discounted_price(batch.price, discount_rate);
    let market_value = batch.current_stock.saturating_mul(final_price);

    let disposal = days_to_expiry <= 0
        || (final_price as f64) <= batch.price * policy.donate_price_floor_ratio;
    if disposal {
        claims.push(StatusClaim {
            rule: RuleKind::Disposal,
            status: BatchStatus::Donate,
        });
    }

    let route = if disposal {
        Route::Ngo
    } else if discount_rate > 0.0 {
        Route::Marketplace
    } else {
        Route::Warehouse
    };

    StockIntelligence {
        days_to_expiry,
        days_in_store,
        unsold_ratio,
        discount_rate,
        final_price,
        market_value,
        status: resolve_status(&claims),
        route,
        applied_rules: claims.iter().map(|c| c.rule).collect(),
    }
}

/// Highest-precedence claim wins; no claim means "Normal".
fn resolve_status(claims: &[StatusClaim]) -> BatchStatus {
    claims
        .iter()
        .max_by_key(|c| c.rule)
        .map(|c| c.status)
        .unwrap_or(BatchStatus::Normal)
}

/// Whole days in `delta`, rounded toward positive infinity.
///
/// Sub-millisecond remainders count; spans too long for nanoseconds fall back
/// to milliseconds.
pub fn ceil_days(delta: Duration) -> i64 {
    match delta.num_nanoseconds() {
        Some(ns) => ceil_div(ns, NS_PER_DAY),
        None => ceil_div(delta.num_milliseconds(), MS_PER_DAY),
    }
}

fn ceil_div(n: i64, d: i64) -> i64 {
    n.div_euclid(d) + i64::from(n.rem_euclid(d) != 0)
}

fn normalize_rate(rate: f64) -> f64 {
    (rate * RATE_SCALE).round() / RATE_SCALE
}

/// `price * (1 - rate)` rounded half-up to a whole unit.
///
/// The kept share is taken in rate units (`1_000_000 - 800_000`) rather than
/// as `1.0 - 0.8`, which is one ulp short of 0.2.
fn discounted_price(price: f64, discount_rate: f64) -> i64 {
    let kept = RATE_SCALE - (discount_rate * RATE_SCALE).round();
    let raw = price * kept / RATE_SCALE;
    let snapped = if raw.abs() < PRICE_SNAP_LIMIT {
        (raw * PRICE_SNAP).round() / PRICE_SNAP
    } else {
        raw
    };
    round_half_up(snapped)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
