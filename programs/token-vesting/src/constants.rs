//! Program-wide constants.

/// Seed prefix of the per-mint vesting config PDA. The config PDA also owns the escrow.
pub const CONFIG_SEED: &[u8] = b"config_vesting";

/// Seed prefix of the escrow token account PDA (`["escrow", config]`).
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Seed prefix of a beneficiary record PDA (`["beneficiary_data", config, wallet]`).
pub const BENEFICIARY_SEED: &[u8] = b"beneficiary_data";

/// Upper bound of the unlock percent.
pub const MAX_PERCENT: u8 = 100;

/// Denominator applied to `entitlement * percent`.
pub const PERCENT_DENOMINATOR: u128 = 100;
