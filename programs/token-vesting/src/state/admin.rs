use anchor_lang::prelude::*;

/// Proof that the current instruction signer is the admin of one config.
///
/// Minted only by [`ConfigVesting::open`](super::ConfigVesting::open) and
/// [`ConfigVesting::authorize`](super::ConfigVesting::authorize); every privileged
/// config mutation takes it by reference. Not `Clone`.
#[derive(Debug)]
pub struct AdminCapability {
    admin: Pubkey,
}

impl AdminCapability {
    pub(crate) fn new(admin: Pubkey) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> Pubkey {
        self.admin
    }
}
