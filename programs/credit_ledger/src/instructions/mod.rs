pub mod initialize_ledger;
pub mod set_issuer;
pub mod issue;
pub mod transfer;
pub mod balance_of;

pub use initialize_ledger::*;
pub use set_issuer::*;
pub use issue::*;
pub use transfer::*;
pub use balance_of::*;
