pub mod initialize_faucet;
pub mod request_claim;
pub mod set_paused;
pub mod views;

pub use initialize_faucet::*;
pub use request_claim::*;
pub use set_paused::*;
pub use views::*;
