use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, ESCROW_SEED};
use crate::error::VestingError;
use crate::state::ConfigVesting;

pub fn initialize_accounts_handler(ctx: Context<InitializeAccounts>) -> Result<()> {
    let escrow_wallet = ctx.accounts.escrow_wallet.key();
    let token_mint = ctx.accounts.token_mint.key();

    let cfg = &mut ctx.accounts.config;
    let cap = cfg.open(
        ctx.accounts.admin.key(),
        token_mint,
        escrow_wallet,
        ctx.bumps.config,
        ctx.bumps.escrow_wallet,
    )?;

    emit!(AccountsInitialized {
        config: cfg.key(),
        admin: cap.admin(),
        mint: token_mint,
        escrow_wallet,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeAccounts<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ConfigVesting::SIZE,
        seeds = [CONFIG_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub config: Account<'info, ConfigVesting>,

    #[account(
        init,
        payer = admin,
        token::mint = token_mint,
        token::authority = config,
        seeds = [ESCROW_SEED, config.key().as_ref()],
        bump
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    /// Source of the later deposit; proves the signer holds tokens of this mint.
    #[account(
        constraint = admin_token_account.mint == token_mint.key() @ VestingError::InvalidTokenMint,
        constraint = admin_token_account.owner == admin.key() @ VestingError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AccountsInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub escrow_wallet: Pubkey,
}
