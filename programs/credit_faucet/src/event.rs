use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct FaucetInitialized {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Ledger the distributor issues from
    pub ledger: Pubkey,
    /// Credit issued per claim
    pub claim_amount: u64,
    /// Seconds between two claims of one identity
    pub cooldown: i64,
    /// Maximum cumulative credit per identity
    pub lifetime_cap: u64,
}

/// Event emitted when credit is claimed
#[event]
pub struct Claimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount issued by this claim
    pub amount: u64,
    /// Time of the claim
    pub timestamp: i64,
    /// Cumulative amount claimed by this claimant
    pub total_claimed: u64,
}

/// Event emitted on every set_paused call, even if the flag is unchanged
#[event]
pub struct PausedChanged {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// New value of the pause flag
    pub paused: bool,
}
