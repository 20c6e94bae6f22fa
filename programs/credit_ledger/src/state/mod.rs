pub mod ledger_state;
pub mod balance_state;

pub use ledger_state::*;
pub use balance_state::*;
