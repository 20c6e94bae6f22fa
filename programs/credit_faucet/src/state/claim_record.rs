use anchor_lang::prelude::*;
use crate::error::FaucetError;

/**
 * Individual claim record account
 *
 * Tracks when an identity last claimed and how much it has claimed in total.
 * Eligibility is never stored here; it is derived from these two fields, the
 * distributor configuration and the current time (see `ClaimPhase`).
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed)
 * 2. Updated with each successful claim
 * 3. Never closed, growth is bounded by the lifetime cap
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Identity this record belongs to
    /// - Pubkey::default() until the first claim
    pub claimant: Pubkey,

    /// Unix timestamp of the last successful claim
    /// - 0 means the identity never claimed
    pub last_claim_at: i64,

    /// Total amount claimed by this identity (cumulative)
    pub total_claimed: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    /// Whether at least one claim was recorded.
    pub fn has_claimed(&self) -> bool {
        self.last_claim_at != 0
    }

    /// Reads the claim record of `identity` from `info`.
    ///
    /// An account without data is a record that was never created and reads
    /// as the default record. Otherwise the account must be owned by this
    /// program and belong to `identity`.
    pub fn load_or_default(info: &AccountInfo, identity: &Pubkey) -> Result<ClaimRecord> {
        if info.data_len() == 0 {
            return Ok(ClaimRecord::default());
        }

        require!(
            info.owner == &crate::ID,
            FaucetError::InvalidArgument
        );

        let data = info.try_borrow_data()?;
        let record = ClaimRecord::try_deserialize(&mut data.as_ref())?;
        require_keys_eq!(record.claimant, *identity, FaucetError::InvalidArgument);

        Ok(record)
    }
}

/// Claim state of one identity at a given instant
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimPhase {
    /// No claim recorded yet
    NeverClaimed,
    /// Last claim is more recent than the cooldown
    Cooldown,
    /// Cooldown elapsed and allowance left
    Ready,
    /// Lifetime cap reached, terminal
    Exhausted,
}
