use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::ConfigVesting;
use crate::utils::vesting_math;

pub fn invoke_vesting_handler(ctx: Context<InvokeVesting>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let cfg = &mut ctx.accounts.config;
    let cap = cfg.authorize(&ctx.accounts.admin.key())?;
    let computed_percent = cfg.invoke(&cap, now)?;

    // Before the cliff the call succeeds without writing anything.
    if computed_percent.is_none() {
        msg!(
            "invoke_vesting: cliff not reached at {} (cliff ends {}), percent stays {}",
            now,
            vesting_math::cliff_end(cfg.start_time, cfg.cliff_duration),
            cfg.current_percent
        );
    }

    emit!(VestingInvoked {
        config: cfg.key(),
        now,
        applied: computed_percent.is_some(),
        computed_percent,
        current_percent: cfg.current_percent,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InvokeVesting<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.token_mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, ConfigVesting>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingInvoked {
    pub config: Pubkey,
    pub now: i64,
    /// False when the cliff had not elapsed and no state changed.
    pub applied: bool,
    pub computed_percent: Option<u8>,
    pub current_percent: u8,
}
