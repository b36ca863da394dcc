use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED, ESCROW_SEED};
use crate::error::VestingError;
use crate::state::{Beneficiary, ConfigVesting};
use crate::utils::escrow;

pub fn claim_handler(ctx: Context<Claim>) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let wallet = ctx.accounts.beneficiary_wallet.key();
    let record_info = ctx.accounts.beneficiary_data.to_account_info();
    let mut record = Beneficiary::load(&record_info, &config_key, &wallet)?;

    // Percent is read once; the whole claim settles against this snapshot.
    let now = Clock::get()?.unix_timestamp;
    let percent = ctx.accounts.config.claim_percent(now)?;
    let amount = record.settle_claim(percent, ctx.accounts.escrow_wallet.amount)?;

    let cfg = &ctx.accounts.config;
    escrow::release(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.escrow_wallet.to_account_info(),
        ctx.accounts.beneficiary_wallet.to_account_info(),
        cfg.to_account_info(),
        &cfg.signer_seeds(),
        amount,
    )?;

    record.store(&record_info)?;
    let cfg = &mut ctx.accounts.config;
    cfg.record_claim(amount)?;

    ctx.accounts.escrow_wallet.reload()?;
    require!(
        ctx.accounts.escrow_wallet.amount >= ctx.accounts.config.expected_escrow_balance()?,
        VestingError::InsufficientFunds
    );

    msg!(
        "Claimed {} tokens at {}%. Total claimed: {}/{}",
        amount,
        percent,
        record.claimed_tokens,
        record.total_tokens,
    );

    emit!(TokensClaimed {
        config: config_key,
        beneficiary_wallet: wallet,
        amount,
        current_percent: percent,
        claimed_total: record.claimed_tokens,
        entitlement: record.total_tokens,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump,
        has_one = escrow_wallet @ VestingError::InvalidTokenAccount,
    )]
    pub config: Account<'info, ConfigVesting>,

    /// CHECK: Address pinned by seeds; contents validated in-handler via
    /// `Beneficiary::load` so an absent record reports `RecordNotFound`.
    #[account(
        mut,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), beneficiary_wallet.key().as_ref()],
        bump
    )]
    pub beneficiary_data: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = beneficiary_wallet.mint == config.token_mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_wallet.owner == beneficiary.key() @ VestingError::Unauthorized,
    )]
    pub beneficiary_wallet: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, config.key().as_ref()],
        bump = config.escrow_bump,
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub config: Pubkey,
    pub beneficiary_wallet: Pubkey,
    pub amount: u64,
    pub current_percent: u8,
    pub claimed_total: u64,
    pub entitlement: u64,
}
