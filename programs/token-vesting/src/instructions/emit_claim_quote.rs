use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::state::{Beneficiary, ConfigVesting, VestingStatus};
use crate::utils::vesting_math;

pub fn emit_claim_quote_handler(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let record = Beneficiary::load(
        &ctx.accounts.beneficiary_data.to_account_info(),
        &cfg.key(),
        &wallet,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let percent = cfg.current_percent;

    emit!(ClaimQuote {
        wallet,
        current_percent: percent,
        entitled: record.entitled(percent)?,
        claimed: record.claimed_tokens,
        claimable: record.claimable(percent)?,
        cliff_reached: vesting_math::cliff_reached(now, cfg.start_time, cfg.cliff_duration),
        funded: cfg.status == VestingStatus::Funded,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitClaimQuote<'info> {
    #[account(
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, ConfigVesting>,

    /// CHECK: Address pinned by seeds; read-only, validated via `Beneficiary::load`.
    #[account(
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub beneficiary_data: UncheckedAccount<'info>,
}

#[event]
pub struct ClaimQuote {
    pub wallet: Pubkey,
    pub current_percent: u8,
    pub entitled: u64,
    pub claimed: u64,
    /// Owed at the current percent, ignoring the cliff.
    pub claimable: u64,
    pub cliff_reached: bool,
    pub funded: bool,
}
