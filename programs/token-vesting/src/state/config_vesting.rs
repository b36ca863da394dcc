use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_PERCENT};
use crate::error::{VestingError, VestingResult};
use crate::state::{AdminCapability, VestingStatus};
use crate::utils::vesting_math;

/// Per-mint vesting config PDA. Also the token authority of the escrow.
#[account]
pub struct ConfigVesting {
    /// Admin authority. Immutable after `initialize_accounts`.
    pub admin: Pubkey,
    /// Token mint under vesting.
    pub token_mint: Pubkey,
    /// Escrow token account (`["escrow", config]`).
    pub escrow_wallet: Pubkey,
    /// Config PDA bump, used to sign escrow transfers.
    pub bump: u8,
    /// Escrow PDA bump.
    pub escrow_bump: u8,
    /// Lifecycle tag.
    pub status: VestingStatus,
    /// Mint decimals recorded at funding.
    pub decimals: u8,
    /// Vesting start (Unix seconds).
    pub start_time: i64,
    /// Seconds after `start_time` before any claim.
    pub cliff_duration: u64,
    /// Seconds after the cliff over which auto-vesting reaches 100%.
    pub vesting_duration: u64,
    /// Base units moved into escrow at funding. Written once.
    pub total_deposited: u64,
    /// Sum of all registered entitlements.
    pub total_entitlement: u64,
    /// Sum of all beneficiaries' claimed amounts.
    pub total_claimed: u64,
    /// Base units returned to the admin by `revoke_vesting`.
    pub total_reclaimed: u64,
    /// Number of beneficiary records registered.
    pub beneficiary_count: u32,
    /// Committed unlock percent, [0, 100], never decreases.
    pub current_percent: u8,
    /// When set, `invoke_vesting` derives the percent from the clock.
    pub auto_vesting: bool,
    /// Latched once the time-based percent has been applied.
    pub vesting_invoked: bool,
}

/// Schedule terms supplied to `initialize_vesting`.
#[derive(Clone, Copy, Debug)]
pub struct VestingTerms {
    /// Whole tokens; scaled by `10^decimals` before transfer.
    pub amount: u64,
    pub decimals: u8,
    pub start_time: i64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
}

impl ConfigVesting {
    pub const SIZE: usize =
        32 + // admin
        32 + // token_mint
        32 + // escrow_wallet
        1 +  // bump
        1 +  // escrow_bump
        1 +  // status
        1 +  // decimals
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // vesting_duration
        8 +  // total_deposited
        8 +  // total_entitlement
        8 +  // total_claimed
        8 +  // total_reclaimed
        4 +  // beneficiary_count
        1 +  // current_percent
        1 +  // auto_vesting
        1;   // vesting_invoked

    /// Populates a freshly created config and hands the creator its admin capability.
    pub fn open(
        &mut self,
        admin: Pubkey,
        token_mint: Pubkey,
        escrow_wallet: Pubkey,
        bump: u8,
        escrow_bump: u8,
    ) -> VestingResult<AdminCapability> {
        let next = self.status.transition(VestingStatus::AccountsReady)?;

        self.admin = admin;
        self.token_mint = token_mint;
        self.escrow_wallet = escrow_wallet;
        self.bump = bump;
        self.escrow_bump = escrow_bump;
        self.status = next;
        self.decimals = 0;
        self.start_time = 0;
        self.cliff_duration = 0;
        self.vesting_duration = 0;
        self.total_deposited = 0;
        self.total_entitlement = 0;
        self.total_claimed = 0;
        self.total_reclaimed = 0;
        self.beneficiary_count = 0;
        self.current_percent = 0;
        self.auto_vesting = false;
        self.vesting_invoked = false;

        Ok(AdminCapability::new(admin))
    }

    pub fn authorize(&self, signer: &Pubkey) -> VestingResult<AdminCapability> {
        if *signer != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(AdminCapability::new(self.admin))
    }

    fn check_capability(&self, cap: &AdminCapability) -> VestingResult<()> {
        if cap.admin() != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Counts a new entitlement against the schedule. Once funded, the sum of
    /// entitlements may not exceed the deposit.
    pub fn register_beneficiary(
        &mut self,
        cap: &AdminCapability,
        entitlement: u64,
    ) -> VestingResult<u32> {
        self.check_capability(cap)?;
        self.status.require_open()?;
        if entitlement == 0 {
            return Err(VestingError::InvalidAmount);
        }

        let total = self
            .total_entitlement
            .checked_add(entitlement)
            .ok_or(VestingError::MathOverflow)?;
        if self.status == VestingStatus::Funded && total > self.total_deposited {
            return Err(VestingError::EntitlementExceedsDeposit);
        }
        let count = self
            .beneficiary_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;

        self.total_entitlement = total;
        self.beneficiary_count = count;
        Ok(count)
    }

    /// Validates the schedule terms and records them. Returns the number of
    /// base units the caller must move from the source account into escrow.
    /// `terms.decimals` must equal the mint's decimals and `start_time` must be positive.
    pub fn fund(
        &mut self,
        cap: &AdminCapability,
        terms: &VestingTerms,
        mint_decimals: u8,
        source_balance: u64,
    ) -> VestingResult<u64> {
        self.check_capability(cap)?;
        let next = self.status.transition(VestingStatus::Funded)?;

        if terms.amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if terms.decimals != mint_decimals {
            return Err(VestingError::InvalidDecimals);
        }
        if terms.start_time <= 0 {
            return Err(VestingError::InvalidTimestamp);
        }
        let scaled = vesting_math::scale_amount(terms.amount, terms.decimals)?;
        if source_balance < scaled {
            return Err(VestingError::InsufficientFunds);
        }
        if self.total_entitlement > scaled {
            return Err(VestingError::EntitlementExceedsDeposit);
        }

        self.status = next;
        self.decimals = terms.decimals;
        self.start_time = terms.start_time;
        self.cliff_duration = terms.cliff_duration;
        self.vesting_duration = terms.vesting_duration;
        self.total_deposited = scaled;
        self.current_percent = 0;
        Ok(scaled)
    }

    /// Manual unlock. Returns the previous percent.
    pub fn set_percent(
        &mut self,
        cap: &AdminCapability,
        percent: u8,
        auto_vesting: bool,
        vesting_invoked: bool,
    ) -> VestingResult<u8> {
        self.check_capability(cap)?;
        self.status.require_funded()?;
        if percent > MAX_PERCENT || percent < self.current_percent {
            return Err(VestingError::InvalidPercent);
        }

        let previous = self.current_percent;
        self.current_percent = percent;
        self.auto_vesting = auto_vesting;
        self.vesting_invoked = vesting_invoked;
        Ok(previous)
    }

    /// Applies the clock-derived percent. `Ok(None)` means the cliff has not
    /// elapsed and nothing was written.
    pub fn invoke(&mut self, cap: &AdminCapability, now_ts: i64) -> VestingResult<Option<u8>> {
        self.check_capability(cap)?;
        self.status.require_funded()?;
        if !self.auto_vesting {
            return Err(VestingError::VestingNotAutomatic);
        }

        let computed = match vesting_math::linear_percent(
            now_ts,
            self.start_time,
            self.cliff_duration,
            self.vesting_duration,
        ) {
            Ok(p) => p,
            Err(VestingError::TooEarly) => return Ok(None),
            Err(e) => return Err(e),
        };

        self.current_percent = self.current_percent.max(computed);
        self.vesting_invoked = true;
        Ok(Some(computed))
    }

    /// Overwrites the mode flags only.
    pub fn reconfigure(
        &mut self,
        cap: &AdminCapability,
        auto_vesting: bool,
        vesting_invoked: bool,
    ) -> VestingResult<()> {
        self.check_capability(cap)?;
        self.status.require_open()?;
        self.auto_vesting = auto_vesting;
        self.vesting_invoked = vesting_invoked;
        Ok(())
    }

    /// Snapshot of the unlock percent for a claim at `now_ts`. The cliff is an
    /// absolute floor regardless of the percent.
    pub fn claim_percent(&self, now_ts: i64) -> VestingResult<u8> {
        self.status.require_funded()?;
        if !vesting_math::cliff_reached(now_ts, self.start_time, self.cliff_duration) {
            return Err(VestingError::BeforeCliff);
        }
        Ok(self.current_percent)
    }

    pub fn record_claim(&mut self, amount: u64) -> VestingResult<()> {
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Marks the schedule revoked. Returns the escrow balance to hand back.
    pub fn revoke(&mut self, cap: &AdminCapability, escrow_balance: u64) -> VestingResult<u64> {
        self.check_capability(cap)?;
        let next = self.status.transition(VestingStatus::Revoked)?;
        if escrow_balance == 0 {
            return Err(VestingError::NothingToReclaim);
        }
        let reclaimed = self
            .total_reclaimed
            .checked_add(escrow_balance)
            .ok_or(VestingError::MathOverflow)?;

        self.total_reclaimed = reclaimed;
        self.status = next;
        Ok(escrow_balance)
    }

    /// Tokens the escrow must still hold: deposited minus claimed minus reclaimed.
    pub fn expected_escrow_balance(&self) -> VestingResult<u64> {
        self.total_deposited
            .checked_sub(self.total_claimed)
            .and_then(|v| v.checked_sub(self.total_reclaimed))
            .ok_or(VestingError::MathOverflow)
    }

    /// Seeds the config PDA signs escrow transfers with.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            CONFIG_SEED,
            self.token_mint.as_ref(),
            core::slice::from_ref(&self.bump),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub const START: i64 = 1_767_225_600;
    pub const CLIFF: u64 = 30 * 86_400;
    pub const DURATION: u64 = 360 * 86_400;

    pub fn admin_key() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    pub fn blank_config() -> ConfigVesting {
        ConfigVesting {
            admin: Pubkey::default(),
            token_mint: Pubkey::default(),
            escrow_wallet: Pubkey::default(),
            bump: 0,
            escrow_bump: 0,
            status: VestingStatus::Uninitialized,
            decimals: 0,
            start_time: 0,
            cliff_duration: 0,
            vesting_duration: 0,
            total_deposited: 0,
            total_entitlement: 0,
            total_claimed: 0,
            total_reclaimed: 0,
            beneficiary_count: 0,
            current_percent: 0,
            auto_vesting: false,
            vesting_invoked: false,
        }
    }

    pub fn terms(amount: u64) -> VestingTerms {
        VestingTerms {
            amount,
            decimals: 0,
            start_time: START,
            cliff_duration: CLIFF,
            vesting_duration: DURATION,
        }
    }

    pub fn opened() -> (ConfigVesting, AdminCapability) {
        let mut cfg = blank_config();
        let cap = cfg
            .open(
                admin_key(),
                Pubkey::new_from_array([2u8; 32]),
                Pubkey::new_from_array([3u8; 32]),
                254,
                253,
            )
            .unwrap();
        (cfg, cap)
    }

    pub fn funded(amount: u64) -> (ConfigVesting, AdminCapability) {
        let (mut cfg, cap) = opened();
        cfg.fund(&cap, &terms(amount), 0, amount).unwrap();
        (cfg, cap)
    }

    #[test]
    fn open_sets_admin_and_ready() {
        let (cfg, cap) = opened();
        assert_eq!(cap.admin(), admin_key());
        assert_eq!(cfg.admin, admin_key());
        assert_eq!(cfg.status, VestingStatus::AccountsReady);
        assert_eq!(cfg.current_percent, 0);
    }

    #[test]
    fn open_twice_rejected() {
        let (mut cfg, _) = opened();
        let r = cfg.open(Pubkey::new_from_array([9u8; 32]), Pubkey::default(), Pubkey::default(), 1, 1);
        assert!(matches!(r, Err(VestingError::InvalidLifecycle)));
        assert_eq!(cfg.admin, admin_key());
    }

    #[test]
    fn authorize_rejects_other_signers() {
        let (cfg, _) = opened();
        assert!(cfg.authorize(&admin_key()).is_ok());
        assert!(matches!(
            cfg.authorize(&Pubkey::new_from_array([7u8; 32])),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn capability_from_other_config_rejected() {
        let (mut cfg, _) = opened();
        let foreign = AdminCapability::new(Pubkey::new_from_array([8u8; 32]));
        assert!(matches!(
            cfg.fund(&foreign, &terms(100), 0, 100),
            Err(VestingError::Unauthorized)
        ));
        assert!(matches!(
            cfg.reconfigure(&foreign, true, false),
            Err(VestingError::Unauthorized)
        ));
        assert!(!cfg.auto_vesting);
    }

    #[test]
    fn fund_scales_and_records() {
        let (mut cfg, cap) = opened();
        let t = VestingTerms { decimals: 6, ..terms(1_000) };
        let scaled = cfg.fund(&cap, &t, 6, 1_000_000_000).unwrap();
        assert_eq!(scaled, 1_000_000_000);
        assert_eq!(cfg.total_deposited, 1_000_000_000);
        assert_eq!(cfg.decimals, 6);
        assert_eq!(cfg.start_time, START);
        assert_eq!(cfg.cliff_duration, CLIFF);
        assert_eq!(cfg.vesting_duration, DURATION);
        assert_eq!(cfg.current_percent, 0);
        assert_eq!(cfg.status, VestingStatus::Funded);
    }

    #[test]
    fn fund_validation_leaves_state_untouched() {
        let (mut cfg, cap) = opened();
        assert!(matches!(
            cfg.fund(&cap, &terms(0), 0, 100),
            Err(VestingError::InvalidAmount)
        ));
        assert!(matches!(
            cfg.fund(&cap, &terms(100), 9, 100),
            Err(VestingError::InvalidDecimals)
        ));
        let bad_start = VestingTerms { start_time: 0, ..terms(100) };
        assert!(matches!(
            cfg.fund(&cap, &bad_start, 0, 100),
            Err(VestingError::InvalidTimestamp)
        ));
        assert!(matches!(
            cfg.fund(&cap, &terms(100), 0, 99),
            Err(VestingError::InsufficientFunds)
        ));
        let huge = VestingTerms { decimals: 19, ..terms(100) };
        assert!(matches!(
            cfg.fund(&cap, &huge, 19, u64::MAX),
            Err(VestingError::MathOverflow)
        ));
        assert_eq!(cfg.status, VestingStatus::AccountsReady);
        assert_eq!(cfg.total_deposited, 0);
    }

    #[test]
    fn fund_twice_is_already_initialized() {
        let (mut cfg, cap) = funded(100);
        assert!(matches!(
            cfg.fund(&cap, &terms(50), 0, 50),
            Err(VestingError::AlreadyInitialized)
        ));
        assert_eq!(cfg.total_deposited, 100);
    }

    #[test]
    fn fund_rejects_deposit_below_entitlements() {
        let (mut cfg, cap) = opened();
        cfg.register_beneficiary(&cap, 600).unwrap();
        assert!(matches!(
            cfg.fund(&cap, &terms(500), 0, 500),
            Err(VestingError::EntitlementExceedsDeposit)
        ));
        assert!(cfg.fund(&cap, &terms(600), 0, 600).is_ok());
    }

    #[test]
    fn register_after_funding_is_capped_by_deposit() {
        let (mut cfg, cap) = funded(1_000);
        assert_eq!(cfg.register_beneficiary(&cap, 400).unwrap(), 1);
        assert_eq!(cfg.register_beneficiary(&cap, 600).unwrap(), 2);
        assert!(matches!(
            cfg.register_beneficiary(&cap, 1),
            Err(VestingError::EntitlementExceedsDeposit)
        ));
        assert!(matches!(
            cfg.register_beneficiary(&cap, 0),
            Err(VestingError::InvalidAmount)
        ));
        assert_eq!(cfg.total_entitlement, 1_000);
        assert_eq!(cfg.beneficiary_count, 2);
    }

    #[test]
    fn release_before_funding_rejected() {
        let (mut cfg, cap) = opened();
        assert!(matches!(
            cfg.set_percent(&cap, 10, false, false),
            Err(VestingError::VestingNotFunded)
        ));
    }

    #[test]
    fn release_is_monotonic() {
        let (mut cfg, cap) = funded(100);
        assert_eq!(cfg.set_percent(&cap, 10, false, false).unwrap(), 0);
        assert_eq!(cfg.set_percent(&cap, 10, false, false).unwrap(), 10);
        assert_eq!(cfg.set_percent(&cap, 40, true, true).unwrap(), 10);
        assert!(cfg.auto_vesting && cfg.vesting_invoked);

        assert!(matches!(
            cfg.set_percent(&cap, 39, false, false),
            Err(VestingError::InvalidPercent)
        ));
        assert!(matches!(
            cfg.set_percent(&cap, 101, false, false),
            Err(VestingError::InvalidPercent)
        ));
        assert_eq!(cfg.current_percent, 40);
        assert!(cfg.auto_vesting && cfg.vesting_invoked);
    }

    #[test]
    fn release_allowed_before_cliff() {
        let (mut cfg, cap) = funded(100);
        cfg.set_percent(&cap, 25, false, false).unwrap();
        assert_eq!(cfg.current_percent, 25);
        assert!(matches!(cfg.claim_percent(START), Err(VestingError::BeforeCliff)));
    }

    #[test]
    fn invoke_requires_auto_mode() {
        let (mut cfg, cap) = funded(100);
        assert!(matches!(
            cfg.invoke(&cap, START + CLIFF as i64),
            Err(VestingError::VestingNotAutomatic)
        ));
    }

    #[test]
    fn invoke_before_cliff_is_noop() {
        let (mut cfg, cap) = funded(100);
        cfg.reconfigure(&cap, true, false).unwrap();
        assert_eq!(cfg.invoke(&cap, START + CLIFF as i64 - 1).unwrap(), None);
        assert_eq!(cfg.current_percent, 0);
        assert!(!cfg.vesting_invoked);
    }

    #[test]
    fn invoke_linear_curve() {
        let (mut cfg, cap) = funded(100);
        cfg.reconfigure(&cap, true, false).unwrap();

        let half = START + (CLIFF + DURATION / 2) as i64;
        assert_eq!(cfg.invoke(&cap, half).unwrap(), Some(50));
        assert_eq!(cfg.current_percent, 50);
        assert!(cfg.vesting_invoked);

        // Same instant again: same percent.
        assert_eq!(cfg.invoke(&cap, half).unwrap(), Some(50));
        assert_eq!(cfg.current_percent, 50);

        let end = START + (CLIFF + DURATION) as i64;
        assert_eq!(cfg.invoke(&cap, end).unwrap(), Some(100));
        assert_eq!(cfg.current_percent, 100);
    }

    #[test]
    fn invoke_never_lowers_manual_percent() {
        let (mut cfg, cap) = funded(100);
        cfg.set_percent(&cap, 80, true, false).unwrap();
        let quarter = START + (CLIFF + DURATION / 4) as i64;
        assert_eq!(cfg.invoke(&cap, quarter).unwrap(), Some(25));
        assert_eq!(cfg.current_percent, 80);
        assert!(cfg.vesting_invoked);
    }

    #[test]
    fn reconfigure_touches_flags_only() {
        let (mut cfg, cap) = funded(100);
        cfg.set_percent(&cap, 20, false, false).unwrap();
        cfg.reconfigure(&cap, true, true).unwrap();
        assert!(cfg.auto_vesting);
        assert!(cfg.vesting_invoked);
        assert_eq!(cfg.current_percent, 20);
        assert_eq!(cfg.total_deposited, 100);
    }

    #[test]
    fn revoke_reclaims_once() {
        let (mut cfg, cap) = funded(100);
        cfg.record_claim(30).unwrap();
        assert_eq!(cfg.expected_escrow_balance().unwrap(), 70);
        assert_eq!(cfg.revoke(&cap, 70).unwrap(), 70);
        assert_eq!(cfg.status, VestingStatus::Revoked);
        assert_eq!(cfg.expected_escrow_balance().unwrap(), 0);

        assert!(matches!(cfg.revoke(&cap, 1), Err(VestingError::VestingRevoked)));
        assert!(matches!(
            cfg.set_percent(&cap, 50, false, false),
            Err(VestingError::VestingRevoked)
        ));
        assert!(matches!(
            cfg.claim_percent(START + CLIFF as i64),
            Err(VestingError::VestingRevoked)
        ));
    }

    #[test]
    fn revoke_empty_escrow_rejected() {
        let (mut cfg, cap) = funded(100);
        assert!(matches!(cfg.revoke(&cap, 0), Err(VestingError::NothingToReclaim)));
        assert_eq!(cfg.status, VestingStatus::Funded);
    }

    #[test]
    fn signer_seeds_match_pda_layout() {
        let (cfg, _) = opened();
        let seeds = cfg.signer_seeds();
        assert_eq!(seeds[0], CONFIG_SEED);
        assert_eq!(seeds[1], cfg.token_mint.as_ref());
        assert_eq!(seeds[2], &[254u8]);
    }
}
