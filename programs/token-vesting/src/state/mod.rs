pub mod admin;
pub mod beneficiary;
pub mod config_vesting;
pub mod lifecycle;

pub use admin::*;
pub use beneficiary::*;
pub use config_vesting::*;
pub use lifecycle::*;
