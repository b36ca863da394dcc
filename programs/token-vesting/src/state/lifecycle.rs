use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};

/// Lifecycle tag stored on the config. Zeroed account data decodes as `Uninitialized`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VestingStatus {
    #[default]
    Uninitialized,
    /// Config and escrow exist; parameters not yet set, nothing deposited.
    AccountsReady,
    /// Escrow funded and schedule parameters recorded.
    Funded,
    /// Admin reclaimed the escrow; terminal.
    Revoked,
}

impl VestingStatus {
    /// The only place a status changes. Legal edges:
    /// `Uninitialized -> AccountsReady -> Funded -> Revoked`.
    pub fn transition(self, next: VestingStatus) -> VestingResult<VestingStatus> {
        use VestingStatus::*;
        match (self, next) {
            (Uninitialized, AccountsReady) | (AccountsReady, Funded) | (Funded, Revoked) => {
                Ok(next)
            }
            (Funded | Revoked, Funded) => Err(VestingError::AlreadyInitialized),
            (Revoked, _) => Err(VestingError::VestingRevoked),
            _ => Err(VestingError::InvalidLifecycle),
        }
    }

    /// Gate for operations that act on a funded, live schedule.
    pub fn require_funded(self) -> VestingResult<()> {
        match self {
            VestingStatus::Funded => Ok(()),
            VestingStatus::Revoked => Err(VestingError::VestingRevoked),
            _ => Err(VestingError::VestingNotFunded),
        }
    }

    /// Gate for admin bookkeeping that is allowed before and after funding.
    pub fn require_open(self) -> VestingResult<()> {
        match self {
            VestingStatus::AccountsReady | VestingStatus::Funded => Ok(()),
            VestingStatus::Revoked => Err(VestingError::VestingRevoked),
            VestingStatus::Uninitialized => Err(VestingError::InvalidLifecycle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_edges_only() {
        use VestingStatus::*;
        assert_eq!(Uninitialized.transition(AccountsReady).unwrap(), AccountsReady);
        assert_eq!(AccountsReady.transition(Funded).unwrap(), Funded);
        assert_eq!(Funded.transition(Revoked).unwrap(), Revoked);

        assert!(matches!(
            Uninitialized.transition(Funded),
            Err(VestingError::InvalidLifecycle)
        ));
        assert!(matches!(
            AccountsReady.transition(AccountsReady),
            Err(VestingError::InvalidLifecycle)
        ));
        assert!(matches!(
            AccountsReady.transition(Revoked),
            Err(VestingError::InvalidLifecycle)
        ));
    }

    #[test]
    fn refunding_is_already_initialized() {
        use VestingStatus::*;
        assert!(matches!(
            Funded.transition(Funded),
            Err(VestingError::AlreadyInitialized)
        ));
        assert!(matches!(
            Revoked.transition(Funded),
            Err(VestingError::AlreadyInitialized)
        ));
        assert!(matches!(
            Revoked.transition(Revoked),
            Err(VestingError::VestingRevoked)
        ));
    }

    #[test]
    fn gates() {
        use VestingStatus::*;
        assert!(Funded.require_funded().is_ok());
        assert!(matches!(
            AccountsReady.require_funded(),
            Err(VestingError::VestingNotFunded)
        ));
        assert!(matches!(
            Revoked.require_funded(),
            Err(VestingError::VestingRevoked)
        ));
        assert!(AccountsReady.require_open().is_ok());
        assert!(Funded.require_open().is_ok());
        assert!(matches!(
            Uninitialized.require_open(),
            Err(VestingError::InvalidLifecycle)
        ));
    }

    #[test]
    fn zeroed_bytes_decode_as_uninitialized() {
        let status = VestingStatus::try_from_slice(&[0u8]).unwrap();
        assert_eq!(status, VestingStatus::Uninitialized);
    }
}
