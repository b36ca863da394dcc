use anchor_lang::prelude::*;

/// Custom error codes for the token vesting escrow.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: signer lacks the required role")]
    Unauthorized,

    #[msg("Vesting has already been initialized")]
    AlreadyInitialized,

    #[msg("Beneficiary record already exists")]
    AlreadyExists,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid percent (must be <= 100 and not below the current percent)")]
    InvalidPercent,

    #[msg("Insufficient funds in source account")]
    InsufficientFunds,

    #[msg("Claim before cliff time")]
    BeforeCliff,

    #[msg("Cliff has not elapsed yet")]
    TooEarly,

    #[msg("Nothing available to claim")]
    NothingToClaim,

    #[msg("Beneficiary record not found")]
    RecordNotFound,

    #[msg("Vesting is not in automatic mode")]
    VestingNotAutomatic,

    #[msg("Vesting escrow has not been funded")]
    VestingNotFunded,

    #[msg("Vesting revoked by admin")]
    VestingRevoked,

    #[msg("Escrow wallet is empty")]
    NothingToReclaim,

    #[msg("Total entitlement would exceed the deposited amount")]
    EntitlementExceedsDeposit,

    #[msg("Decimals do not match the token mint")]
    InvalidDecimals,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid lifecycle transition")]
    InvalidLifecycle,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the runtime-independent vesting engine.
pub type VestingResult<T> = core::result::Result<T, VestingError>;
