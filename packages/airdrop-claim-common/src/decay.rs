use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Timestamp, Uint128};

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Exact rational share of a per-action amount that is still payable.
///
/// Kept as `numerator / denominator` in block-time nanoseconds so every node
/// evaluating the same block time computes the same payout. Applying it
/// floors toward zero.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct DecayFraction {
    pub numerator: Uint128,
    pub denominator: Uint128,
}

impl DecayFraction {
    pub const FULL: DecayFraction = DecayFraction {
        numerator: Uint128::one(),
        denominator: Uint128::one(),
    };

    pub const ZERO: DecayFraction = DecayFraction {
        numerator: Uint128::zero(),
        denominator: Uint128::one(),
    };

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_full(&self) -> bool {
        self.numerator == self.denominator
    }

    /// `floor(amount * numerator / denominator)`, computed in 256 bits.
    pub fn apply(&self, amount: Uint128) -> Uint128 {
        amount.multiply_ratio(self.numerator, self.denominator)
    }

    /// Lossy view for queries and events; never used to compute payouts.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_ratio(self.numerator, self.denominator)
    }
}

/// Fraction of the per-action amount claimable at `now`.
///
/// Full until `start + duration_until_decay`, then falls linearly to zero over
/// `duration_of_decay` seconds, and stays zero from
/// `start + duration_until_decay + duration_of_decay` on. Times before `start`
/// report `FULL`; callers reject claims before the airdrop starts.
pub fn claimable_fraction(
    now: Timestamp,
    start: Timestamp,
    duration_until_decay: u64,
    duration_of_decay: u64,
) -> DecayFraction {
    let now = u128::from(now.nanos());
    let start = u128::from(start.nanos());
    if now < start {
        return DecayFraction::FULL;
    }

    let decay_start = start + u128::from(duration_until_decay) * NANOS_PER_SECOND;
    if now < decay_start {
        return DecayFraction::FULL;
    }

    let decay_length = u128::from(duration_of_decay) * NANOS_PER_SECOND;
    let decay_end = decay_start + decay_length;
    if now >= decay_end {
        return DecayFraction::ZERO;
    }

    DecayFraction {
        numerator: Uint128::new(decay_end - now),
        denominator: Uint128::new(decay_length),
    }
}

/// The three time parameters of an airdrop, bundled for evaluation.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct DecaySchedule {
    pub start: Timestamp,
    pub duration_until_decay: u64,
    pub duration_of_decay: u64,
}

impl DecaySchedule {
    pub fn fraction_at(&self, now: Timestamp) -> DecayFraction {
        claimable_fraction(
            now,
            self.start,
            self.duration_until_decay,
            self.duration_of_decay,
        )
    }

    pub fn has_started(&self, now: Timestamp) -> bool {
        now >= self.start
    }

    /// True once nothing is claimable any more.
    pub fn has_ended(&self, now: Timestamp) -> bool {
        self.has_started(now) && self.fraction_at(now).is_zero()
    }
}
