use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::ConfigVesting;

pub fn release_handler(
    ctx: Context<Release>,
    percent: u8,
    auto_vesting: bool,
    vesting_invoked: bool,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;
    let previous_percent = cfg.set_percent(&cap, percent, auto_vesting, vesting_invoked)?;

    emit!(PercentReleased {
        config: cfg.key(),
        previous_percent,
        current_percent: cfg.current_percent,
        auto_vesting,
        vesting_invoked,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, ConfigVesting>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PercentReleased {
    pub config: Pubkey,
    pub previous_percent: u8,
    pub current_percent: u8,
    pub auto_vesting: bool,
    pub vesting_invoked: bool,
}
