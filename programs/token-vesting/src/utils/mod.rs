pub mod escrow;
pub mod vesting_math;
