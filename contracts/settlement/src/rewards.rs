//! Reward arithmetic for staked balances.
//!
//! Kept as pure functions of `(position, rate, now)` so accrual is
//! deterministic and replayable from a sequence of timestamped operations.

use crate::errors::Error;

/// Seconds in a non-leap year, the denominator of the annual rate.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Basis-point denominator shared by fee and reward rates.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Rewards accrued by a position between `last_claim` and `now`.
///
/// `principal * rate_bps * elapsed / (10_000 * SECONDS_PER_YEAR)`,
/// integer-truncated, monotonically non-decreasing in `now`. Zero elapsed
/// time yields zero. A `now` earlier than `last_claim` is a clock fault and
/// is rejected rather than ever producing a negative amount.
pub fn pending(principal: i128, rate_bps: u32, last_claim: u64, now: u64) -> Result<i128, Error> {
    if now < last_claim {
        return Err(Error::ClockRegression);
    }
    let elapsed = (now - last_claim) as i128;
    let accrued = principal
        .checked_mul(rate_bps as i128)
        .and_then(|v| v.checked_mul(elapsed))
        .ok_or(Error::AmountOverflow)?;
    Ok(accrued / (BPS_DENOMINATOR * SECONDS_PER_YEAR as i128))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_at_ten_percent() {
        // floor(principal * rate * elapsed / (10_000 * seconds_per_year))
        let expected = (1_000_000_000i128 * 1_000 * 86_400) / (10_000 * 31_536_000);
        assert_eq!(pending(1_000_000_000, 1_000, 0, 86_400), Ok(expected));
    }

    #[test]
    fn zero_elapsed_yields_zero() {
        assert_eq!(pending(1_000_000_000, 1_000, 500, 500), Ok(0));
    }

    #[test]
    fn sub_unit_accrual_truncates_to_zero() {
        // Small principal over one day rounds down to nothing.
        assert_eq!(pending(1_000, 1_000, 0, 86_400), Ok(0));
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut last = 0;
        for now in [0u64, 1, 3_600, 86_400, 31_536_000] {
            let r = pending(5_000_000_000, 750, 0, now).unwrap();
            assert!(r >= last);
            last = r;
        }
    }

    #[test]
    fn full_year_pays_the_annual_rate() {
        assert_eq!(
            pending(1_000_000_000, 1_000, 0, SECONDS_PER_YEAR),
            Ok(100_000_000)
        );
    }

    #[test]
    fn clock_regression_rejected() {
        assert_eq!(pending(1_000, 1_000, 100, 99), Err(Error::ClockRegression));
    }

    #[test]
    fn overflow_rejected() {
        assert_eq!(
            pending(i128::MAX, 10_000, 0, SECONDS_PER_YEAR),
            Err(Error::AmountOverflow)
        );
    }
}
