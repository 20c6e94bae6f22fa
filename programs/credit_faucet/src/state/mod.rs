pub mod distributor_state;
pub mod claim_record;

pub use distributor_state::*;
pub use claim_record::*;
