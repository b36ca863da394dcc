use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};
use crate::utils::vesting_math;

/// One beneficiary's entitlement and claim progress (`["beneficiary_data", config, wallet]`).
#[account]
pub struct Beneficiary {
    /// Owning config. `Pubkey::default()` while the PDA is still vacant.
    pub config: Pubkey,
    /// Destination token account.
    pub beneficiary_wallet: Pubkey,
    /// Entitlement at 100% unlock. Immutable once registered.
    pub total_tokens: u64,
    /// Cumulative amount transferred out of escrow to this beneficiary.
    pub claimed_tokens: u64,
    pub bump: u8,
}

impl Beneficiary {
    pub const SIZE: usize =
        32 + // config
        32 + // beneficiary_wallet
        8 +  // total_tokens
        8 +  // claimed_tokens
        1;   // bump

    /// Reads the record behind `info`, mapping an absent or foreign account to
    /// `RecordNotFound` instead of a deserialization failure.
    pub fn load(info: &AccountInfo, config: &Pubkey, wallet: &Pubkey) -> Result<Beneficiary> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(VestingError::RecordNotFound);
        }
        let record = {
            let data = info.try_borrow_data()?;
            Beneficiary::try_deserialize(&mut &data[..])
                .map_err(|_| error!(VestingError::RecordNotFound))?
        };
        if !record.is_registered()
            || record.config != *config
            || record.beneficiary_wallet != *wallet
        {
            return err!(VestingError::RecordNotFound);
        }
        Ok(record)
    }

    /// Writes the record back into `info` (discriminator included).
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    pub fn is_registered(&self) -> bool {
        self.config != Pubkey::default()
    }

    pub fn ensure_vacant(&self) -> VestingResult<()> {
        if self.is_registered() {
            return Err(VestingError::AlreadyExists);
        }
        Ok(())
    }

    pub fn register(&mut self, config: Pubkey, beneficiary_wallet: Pubkey, total_tokens: u64, bump: u8) {
        self.config = config;
        self.beneficiary_wallet = beneficiary_wallet;
        self.total_tokens = total_tokens;
        self.claimed_tokens = 0;
        self.bump = bump;
    }

    /// Amount unlocked for this beneficiary at `percent`.
    pub fn entitled(&self, percent: u8) -> VestingResult<u64> {
        vesting_math::entitled_amount(self.total_tokens, percent)
    }

    pub fn claimable(&self, percent: u8) -> VestingResult<u64> {
        Ok(self.entitled(percent)?.saturating_sub(self.claimed_tokens))
    }

    /// Settles a claim at `percent` against an escrow holding `escrow_balance`.
    /// Returns the delta to transfer; `claimed_tokens` becomes the entitled amount.
    pub fn settle_claim(&mut self, percent: u8, escrow_balance: u64) -> VestingResult<u64> {
        let entitled = self.entitled(percent)?;
        let delta = entitled.saturating_sub(self.claimed_tokens);
        if delta == 0 {
            return Err(VestingError::NothingToClaim);
        }
        if escrow_balance < delta {
            return Err(VestingError::InsufficientFunds);
        }
        self.claimed_tokens = entitled;
        Ok(delta)
    }
}
