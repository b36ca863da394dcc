pub mod initialize_accounts;
pub mod add_beneficiary;
pub mod initialize_vesting;
pub mod release;
pub mod invoke_vesting;
pub mod reconfigure_vesting;
pub mod claim;
pub mod revoke_vesting;
pub mod emit_claim_quote;

pub use initialize_accounts::*;
pub use add_beneficiary::*;
pub use initialize_vesting::*;
pub use release::*;
pub use invoke_vesting::*;
pub use reconfigure_vesting::*;
pub use claim::*;
pub use revoke_vesting::*;
pub use emit_claim_quote::*;
