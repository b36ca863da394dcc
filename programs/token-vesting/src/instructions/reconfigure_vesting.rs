use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::ConfigVesting;

pub fn reconfigure_vesting_handler(
    ctx: Context<ReconfigureVesting>,
    auto_vesting: bool,
    vesting_invoked: bool,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;
    cfg.reconfigure(&cap, auto_vesting, vesting_invoked)?;

    emit!(VestingReconfigured {
        config: cfg.key(),
        auto_vesting,
        vesting_invoked,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ReconfigureVesting<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, ConfigVesting>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingReconfigured {
    pub config: Pubkey,
    pub auto_vesting: bool,
    pub vesting_invoked: bool,
}
