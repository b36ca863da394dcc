use anchor_lang::prelude::*;

declare_id!("Ap4dZv44XXwjPrUMtV7r52rYaQBUBG5UpAtmpt1YdgCg");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod token_vesting {
    use super::*;

    pub fn initialize_accounts(ctx: Context<InitializeAccounts>) -> Result<()> {
        instructions::initialize_accounts::initialize_accounts_handler(ctx)
    }

    pub fn add_beneficiary(ctx: Context<AddBeneficiary>, entitlement: u64) -> Result<()> {
        instructions::add_beneficiary::add_beneficiary_handler(ctx, entitlement)
    }

    pub fn initialize_vesting(
        ctx: Context<InitializeVesting>,
        amount: u64,
        decimals: u8,
        start_time: i64,
        cliff_duration: u64,
        vesting_duration: u64,
    ) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting_handler(
            ctx,
            amount,
            decimals,
            start_time,
            cliff_duration,
            vesting_duration,
        )
    }

    pub fn release(
        ctx: Context<Release>,
        percent: u8,
        auto_vesting: bool,
        vesting_invoked: bool,
    ) -> Result<()> {
        instructions::release::release_handler(ctx, percent, auto_vesting, vesting_invoked)
    }

    pub fn invoke_vesting(ctx: Context<InvokeVesting>) -> Result<()> {
        instructions::invoke_vesting::invoke_vesting_handler(ctx)
    }

    pub fn reconfigure_vesting(
        ctx: Context<ReconfigureVesting>,
        auto_vesting: bool,
        vesting_invoked: bool,
    ) -> Result<()> {
        instructions::reconfigure_vesting::reconfigure_vesting_handler(ctx, auto_vesting, vesting_invoked)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim_handler(ctx)
    }

    pub fn revoke_vesting(ctx: Context<RevokeVesting>) -> Result<()> {
        instructions::revoke_vesting::revoke_vesting_handler(ctx)
    }

    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote_handler(ctx, wallet)
    }
}
