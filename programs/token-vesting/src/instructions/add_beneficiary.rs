use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{BENEFICIARY_SEED, CONFIG_SEED};
use crate::error::VestingError;
use crate::state::{Beneficiary, ConfigVesting};

pub fn add_beneficiary_handler(ctx: Context<AddBeneficiary>, entitlement: u64) -> Result<()> {
    let config_key = ctx.accounts.config.key();
    let wallet = ctx.accounts.beneficiary_wallet.key();

    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;

    // `init_if_needed` hands back an existing record untouched; refuse to overwrite it.
    let record = &mut ctx.accounts.beneficiary_data;
    record.ensure_vacant()?;

    let count = cfg.register_beneficiary(&cap, entitlement)?;
    record.register(config_key, wallet, entitlement, ctx.bumps.beneficiary_data);

    emit!(BeneficiaryAdded {
        config: config_key,
        beneficiary_wallet: wallet,
        entitlement,
        beneficiary_count: count,
        total_entitlement: cfg.total_entitlement,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiary<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, ConfigVesting>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Beneficiary::SIZE,
        seeds = [BENEFICIARY_SEED, config.key().as_ref(), beneficiary_wallet.key().as_ref()],
        bump
    )]
    pub beneficiary_data: Account<'info, Beneficiary>,

    #[account(
        constraint = beneficiary_wallet.mint == config.token_mint @ VestingError::InvalidTokenMint,
    )]
    pub beneficiary_wallet: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryAdded {
    pub config: Pubkey,
    pub beneficiary_wallet: Pubkey,
    pub entitlement: u64,
    pub beneficiary_count: u32,
    pub total_entitlement: u64,
}
