use anchor_lang::prelude::*;

/// Event emitted when a new ledger is created
#[event]
pub struct LedgerInitialized {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Owner allowed to manage the issuer
    pub owner: Pubkey,
    /// Maximum cumulative issuance
    pub supply_cap: u64,
}

/// Event emitted when the owner registers a new issuer
#[event]
pub struct IssuerUpdated {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Identity now allowed to call `issue`
    pub issuer: Pubkey,
}

/// Event emitted for every movement of credit, including issuance
#[event]
pub struct Transfer {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Sender, or `MINT_ORIGIN` for newly issued credit
    pub from: Pubkey,
    /// Receiver
    pub to: Pubkey,
    /// Amount moved
    pub amount: u64,
}
