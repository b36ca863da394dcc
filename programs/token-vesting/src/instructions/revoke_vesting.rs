use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, ESCROW_SEED};
use crate::error::VestingError;
use crate::state::ConfigVesting;
use crate::utils::escrow;

pub fn revoke_vesting_handler(ctx: Context<RevokeVesting>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;
    let amount = cfg.revoke(&cap, ctx.accounts.escrow_wallet.amount)?;

    let cfg = &ctx.accounts.config;
    escrow::release(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.escrow_wallet.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        cfg.to_account_info(),
        &cfg.signer_seeds(),
        amount,
    )?;

    emit!(EscrowReclaimed {
        config: cfg.key(),
        admin: cap.admin(),
        amount,
        total_claimed: cfg.total_claimed,
        total_reclaimed: cfg.total_reclaimed,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RevokeVesting<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump,
        has_one = escrow_wallet @ VestingError::InvalidTokenAccount,
    )]
    pub config: Account<'info, ConfigVesting>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, config.key().as_ref()],
        bump = config.escrow_bump,
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == config.token_mint @ VestingError::InvalidTokenMint,
        constraint = admin_token_account.owner == admin.key() @ VestingError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EscrowReclaimed {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub total_reclaimed: u64,
}
