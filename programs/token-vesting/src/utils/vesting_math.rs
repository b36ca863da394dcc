//! Integer vesting arithmetic (no floats, no rounding drift).
//! - scaled deposit = amount * 10^decimals
//! - entitled = floor(entitlement * percent / 100)
//! - linear percent = min(100, floor(100 * (elapsed - cliff) / duration)), elapsed >= cliff

use crate::constants::{MAX_PERCENT, PERCENT_DENOMINATOR};
use crate::error::VestingError;

/// Base units moved into escrow for a deposit of `amount` whole tokens.
pub fn scale_amount(amount: u64, decimals: u8) -> Result<u64, VestingError> {
    let factor = 10u64
        .checked_pow(decimals as u32)
        .ok_or(VestingError::MathOverflow)?;
    amount.checked_mul(factor).ok_or(VestingError::MathOverflow)
}

/// Portion of `entitlement` unlocked at `percent`, rounded down.
pub fn entitled_amount(entitlement: u64, percent: u8) -> Result<u64, VestingError> {
    if percent > MAX_PERCENT {
        return Err(VestingError::InvalidPercent);
    }
    let v = (entitlement as u128)
        .checked_mul(percent as u128)
        .ok_or(VestingError::MathOverflow)?
        / PERCENT_DENOMINATOR;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// True once `now - start_ts >= cliff_duration`. Inclusive at the boundary.
pub fn cliff_reached(now_ts: i64, start_ts: i64, cliff_duration: u64) -> bool {
    let elapsed = i128::from(now_ts) - i128::from(start_ts);
    elapsed >= i128::from(cliff_duration)
}

/// Timestamp at which the cliff elapses, saturating at `i64::MAX`.
pub fn cliff_end(start_ts: i64, cliff_duration: u64) -> i64 {
    start_ts.saturating_add(i64::try_from(cliff_duration).unwrap_or(i64::MAX))
}

/// Unlock percent implied by the clock for an auto-vesting schedule.
///
/// Fails with `TooEarly` while the cliff has not elapsed (including `now < start`).
/// A zero `vesting_duration` unlocks everything at the cliff.
pub fn linear_percent(
    now_ts: i64,
    start_ts: i64,
    cliff_duration: u64,
    vesting_duration: u64,
) -> Result<u8, VestingError> {
    let elapsed = i128::from(now_ts) - i128::from(start_ts);
    let cliff = i128::from(cliff_duration);
    if elapsed < cliff {
        return Err(VestingError::TooEarly);
    }
    if vesting_duration == 0 {
        return Ok(MAX_PERCENT);
    }
    let since_cliff = u128::try_from(elapsed - cliff).map_err(|_| VestingError::MathOverflow)?;
    let pct = since_cliff
        .checked_mul(MAX_PERCENT as u128)
        .ok_or(VestingError::MathOverflow)?
        / vesting_duration as u128;
    Ok(pct.min(MAX_PERCENT as u128) as u8)
}
