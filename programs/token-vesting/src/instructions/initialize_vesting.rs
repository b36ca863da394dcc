use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, ESCROW_SEED};
use crate::error::VestingError;
use crate::state::{ConfigVesting, VestingTerms};
use crate::utils::escrow;

pub fn initialize_vesting_handler(
    ctx: Context<InitializeVesting>,
    amount: u64,
    decimals: u8,
    start_time: i64,
    cliff_duration: u64,
    vesting_duration: u64,
) -> Result<()> {
    let terms = VestingTerms {
        amount,
        decimals,
        start_time,
        cliff_duration,
        vesting_duration,
    };

    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;
    let scaled = cfg.fund(
        &cap,
        &terms,
        ctx.accounts.token_mint.decimals,
        ctx.accounts.admin_token_account.amount,
    )?;

    escrow::deposit(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        ctx.accounts.escrow_wallet.to_account_info(),
        ctx.accounts.admin.to_account_info(),
        scaled,
    )?;

    ctx.accounts.escrow_wallet.reload()?;
    require!(
        ctx.accounts.escrow_wallet.amount >= scaled,
        VestingError::InsufficientFunds
    );

    emit!(VestingInitialized {
        config: cfg.key(),
        admin: cap.admin(),
        amount: scaled,
        decimals,
        start_time,
        cliff_duration,
        vesting_duration,
        escrow_balance: ctx.accounts.escrow_wallet.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVesting<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, token_mint.key().as_ref()],
        bump = config.bump,
        has_one = token_mint @ VestingError::InvalidTokenMint,
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
        constraint = admin_token_account.mint == token_mint.key() @ VestingError::InvalidTokenMint,
        constraint = admin_token_account.owner == admin.key() @ VestingError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    /// Base units deposited (`amount * 10^decimals`).
    pub amount: u64,
    pub decimals: u8,
    pub start_time: i64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
    pub escrow_balance: u64,
}
