//! SPL token transfers into and out of the escrow.
//! Outbound transfers are authorized by the config PDA that owns the escrow.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

/// Admin-signed deposit from `source` into the escrow.
pub fn deposit<'info>(
    token_program: AccountInfo<'info>,
    source: AccountInfo<'info>,
    escrow: AccountInfo<'info>,
    admin: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program,
            Transfer {
                from: source,
                to: escrow,
                authority: admin,
            },
        ),
        amount,
    )
}

/// Moves `amount` out of the escrow, signed with the config PDA seeds.
pub fn release<'info>(
    token_program: AccountInfo<'info>,
    escrow: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    config: AccountInfo<'info>,
    config_seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[config_seeds];
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: escrow,
                to: destination,
                authority: config,
            },
            signer_seeds,
        ),
        amount,
    )
}
