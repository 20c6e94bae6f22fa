use anchor_lang::prelude::*;
use credit_ledger::state::LedgerState;
use crate::constants::*;
use crate::error::FaucetError;
use crate::state::{ClaimPhase, ClaimRecord};

/**
 * Main distributor state account
 *
 * Holds the immutable claim configuration of a faucet, its pause flag, and the
 * rules deciding whether an identity may claim. The distributor PDA is the
 * identity registered as issuer on the ledger.
 *
 * Derivation: ["distributor", ledger]
 *
 * Lifecycle:
 * 1. Created during initialize_faucet
 * 2. paused toggled by the owner through set_paused
 * 3. total_distributed incremented with each successful claim
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Needed to sign issue calls on the ledger
    pub bump: u8,

    /// Owner of the distributor
    /// - Only identity allowed to pause or resume claims
    pub owner: Pubkey,

    /// Ledger account this distributor issues from
    pub ledger: Pubkey,

    /// Fixed amount issued by each successful claim
    pub claim_amount: u64,

    /// Minimum number of seconds between two claims of one identity
    pub cooldown: i64,

    /// Maximum cumulative amount one identity may claim
    pub lifetime_cap: u64,

    /// Kill-switch; no claim succeeds while set
    pub paused: bool,

    /// Total amount issued through this distributor
    pub total_distributed: u64,
}

/// Configuration supplied when the faucet is created
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaucetParams {
    pub claim_amount: u64,
    pub cooldown: i64,
    pub lifetime_cap: u64,
}

impl Default for FaucetParams {
    fn default() -> Self {
        FaucetParams {
            claim_amount: DEFAULT_CLAIM_AMOUNT,
            cooldown: DEFAULT_COOLDOWN,
            lifetime_cap: DEFAULT_LIFETIME_CAP,
        }
    }
}

impl FaucetParams {
    pub fn validate(&self) -> core::result::Result<(), FaucetError> {
        if self.claim_amount == 0 || self.cooldown < 0 || self.lifetime_cap < self.claim_amount {
            return Err(FaucetError::InvalidArgument);
        }
        Ok(())
    }
}

impl Distributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    /// Applies validated parameters to a freshly created distributor.
    pub fn configure(
        &mut self,
        owner: Pubkey,
        ledger: Pubkey,
        bump: u8,
        params: &FaucetParams,
    ) -> core::result::Result<(), FaucetError> {
        params.validate()?;
        if owner == Pubkey::default() || ledger == Pubkey::default() {
            return Err(FaucetError::InvalidArgument);
        }

        self.bump = bump;
        self.owner = owner;
        self.ledger = ledger;
        self.claim_amount = params.claim_amount;
        self.cooldown = params.cooldown;
        self.lifetime_cap = params.lifetime_cap;
        Ok(())
    }

    /// Sets the kill-switch; only the owner may change it.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> core::result::Result<(), FaucetError> {
        if *caller != self.owner {
            return Err(FaucetError::Unauthorized);
        }
        self.paused = paused;
        Ok(())
    }

    /// Derives the claim phase of `record` at time `now`.
    ///
    /// An open cooldown window is reported before exhaustion, matching the
    /// order in which `check_claim` evaluates its guards.
    pub fn claim_phase(&self, record: &ClaimRecord, now: i64) -> ClaimPhase {
        if !record.has_claimed() {
            ClaimPhase::NeverClaimed
        } else if now < self.next_claim_at(record) {
            ClaimPhase::Cooldown
        } else if record.total_claimed >= self.lifetime_cap {
            ClaimPhase::Exhausted
        } else {
            ClaimPhase::Ready
        }
    }

    /// Earliest time at which `record` leaves its cooldown.
    pub fn next_claim_at(&self, record: &ClaimRecord) -> i64 {
        record.last_claim_at.saturating_add(self.cooldown)
    }

    /// Amount `record` may still claim before reaching the lifetime cap.
    pub fn remaining_allowance(&self, record: &ClaimRecord) -> u64 {
        self.lifetime_cap.saturating_sub(record.total_claimed)
    }

    /// Seconds left before `record` may claim again, 0 if it may claim now.
    pub fn time_until_next_claim(&self, record: &ClaimRecord, now: i64) -> i64 {
        if !record.has_claimed() {
            return 0;
        }
        self.next_claim_at(record).saturating_sub(now).max(0)
    }

    /// Runs the claim guards in order; the first failing guard decides the error.
    ///
    /// 1. Faucet paused
    /// 2. Cooldown still open
    /// 3. Lifetime cap reached
    /// 4. Remaining allowance below the claim amount
    pub fn check_claim(&self, record: &ClaimRecord, now: i64) -> core::result::Result<(), FaucetError> {
        if self.paused {
            return Err(FaucetError::FaucetPaused);
        }

        match self.claim_phase(record, now) {
            ClaimPhase::Cooldown => Err(FaucetError::CooldownActive),
            ClaimPhase::Exhausted => Err(FaucetError::LifetimeLimitReached),
            ClaimPhase::NeverClaimed | ClaimPhase::Ready => {
                if self.remaining_allowance(record) < self.claim_amount {
                    return Err(FaucetError::InsufficientAllowance);
                }
                Ok(())
            }
        }
    }

    /// Fails with `LedgerMismatch` unless `ledger` is the ledger this
    /// distributor is bound to.
    pub fn check_ledger(&self, ledger: &Pubkey) -> core::result::Result<(), FaucetError> {
        if *ledger != self.ledger {
            return Err(FaucetError::LedgerMismatch);
        }
        Ok(())
    }

    /// Whether a claim for `record` would succeed at `now`, including the
    /// ledger accepting the issuance: `distributor_key` must be the ledger's
    /// issuer and the remaining supply must cover one claim.
    pub fn can_claim(
        &self,
        distributor_key: &Pubkey,
        ledger: &LedgerState,
        record: &ClaimRecord,
        now: i64,
    ) -> bool {
        self.check_claim(record, now).is_ok() && ledger.can_issue(distributor_key, self.claim_amount)
    }

    /// Checks eligibility and records the claim of `claimant` on `record` and
    /// on the distributor totals. Nothing is written unless every check
    /// passes. Returns the amount the ledger must issue.
    pub fn commit_claim(
        &mut self,
        claimant: &Pubkey,
        record: &mut ClaimRecord,
        now: i64,
    ) -> core::result::Result<u64, FaucetError> {
        if record.claimant != Pubkey::default() && record.claimant != *claimant {
            return Err(FaucetError::InvalidArgument);
        }
        self.check_claim(record, now)?;

        let total_claimed = record
            .total_claimed
            .checked_add(self.claim_amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let total_distributed = self
            .total_distributed
            .checked_add(self.claim_amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;

        record.claimant = *claimant;
        record.last_claim_at = now;
        record.total_claimed = total_claimed;
        self.total_distributed = total_distributed;

        Ok(self.claim_amount)
    }
}
