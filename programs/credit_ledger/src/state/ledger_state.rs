use anchor_lang::prelude::*;
use crate::error::CreditLedgerError;
use crate::state::CreditBalance;

/**
 * Ledger state account
 *
 * Owns total-supply accounting for one credit. Only the recorded issuer may
 * create new credit, and every issuance is checked against the supply cap
 * here, regardless of what the issuer itself believes about the supply.
 *
 * Derivation: ["ledger", owner]
 *
 * Lifecycle:
 * 1. Created during initialize_ledger with an immutable supply cap
 * 2. Issuer registered (and later replaced) by the owner through set_issuer
 * 3. total_supply grows with each issue call, never shrinks
 *
 * Invariants:
 * - total_supply <= supply_cap
 * - total_supply equals the sum of all CreditBalance amounts of this ledger
 */
#[account]
#[derive(Default, Debug)]
pub struct LedgerState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Owner of the ledger
    /// - Only identity allowed to call set_issuer
    pub owner: Pubkey,

    /// Sole identity allowed to call issue
    /// - Pubkey::default() until set_issuer is called, which admits nobody
    pub issuer: Pubkey,

    /// Maximum cumulative amount this ledger may ever issue
    pub supply_cap: u64,

    /// Cumulative amount issued so far
    pub total_supply: u64,
}

impl LedgerState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<LedgerState>();

    /// Records `issuer` as the only identity allowed to issue credit.
    /// Re-registering overwrites the previous issuer.
    pub fn set_issuer(
        &mut self,
        caller: &Pubkey,
        issuer: Pubkey,
    ) -> core::result::Result<(), CreditLedgerError> {
        if *caller != self.owner {
            return Err(CreditLedgerError::Unauthorized);
        }
        if issuer == Pubkey::default() {
            return Err(CreditLedgerError::InvalidArgument);
        }
        self.issuer = issuer;
        Ok(())
    }

    /// Amount that can still be issued before the cap is reached.
    pub fn remaining_supply(&self) -> u64 {
        self.supply_cap.saturating_sub(self.total_supply)
    }

    /// Whether `caller` is the registered issuer.
    pub fn is_issuer(&self, caller: &Pubkey) -> bool {
        self.issuer != Pubkey::default() && *caller == self.issuer
    }

    /// Whether `issue` by `caller` for `amount` would pass the issuer and
    /// supply cap checks.
    pub fn can_issue(&self, caller: &Pubkey, amount: u64) -> bool {
        self.is_issuer(caller) && amount > 0 && amount <= self.remaining_supply()
    }

    /// Credits `amount` to `balance` and grows the supply by the same amount.
    ///
    /// Both counters are computed before either is written, so a failure
    /// leaves the ledger and the balance untouched. Returns the new supply.
    pub fn issue(
        &mut self,
        caller: &Pubkey,
        balance: &mut CreditBalance,
        to: &Pubkey,
        amount: u64,
    ) -> core::result::Result<u64, CreditLedgerError> {
        if !self.is_issuer(caller) {
            return Err(CreditLedgerError::Unauthorized);
        }
        if *to == Pubkey::default() || amount == 0 {
            return Err(CreditLedgerError::InvalidArgument);
        }
        if balance.holder != Pubkey::default() && balance.holder != *to {
            return Err(CreditLedgerError::InvalidArgument);
        }

        // An overflowing sum is necessarily above any u64 cap
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(CreditLedgerError::CapExceeded)?;
        if new_supply > self.supply_cap {
            return Err(CreditLedgerError::CapExceeded);
        }
        let new_balance = balance
            .amount
            .checked_add(amount)
            .ok_or(CreditLedgerError::ArithmeticOverflow)?;

        balance.holder = *to;
        balance.amount = new_balance;
        self.total_supply = new_supply;
        Ok(new_supply)
    }
}
