use anchor_lang::prelude::*;
use crate::error::CreditLedgerError;

/**
 * Credit balance account
 *
 * Holds the credit of one identity on one ledger.
 *
 * Derivation: ["balance", ledger_key, holder_key]
 *
 * Lifecycle:
 * 1. Created on first credit (issue or incoming transfer, using init_if_needed)
 * 2. Updated by every issue and transfer touching the holder
 */
#[account]
#[derive(Default, Debug)]
pub struct CreditBalance {
    /// Identity owning this balance
    /// - Pubkey::default() only while the account is freshly created
    pub holder: Pubkey,

    /// Current amount of credit held
    pub amount: u64,
}

impl CreditBalance {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CreditBalance>();

    /// Reads the amount held by `identity` from `info`.
    ///
    /// An account without data has never been credited and reads as zero.
    /// Otherwise the account must be owned by this program and belong to
    /// `identity`.
    pub fn load_amount(info: &AccountInfo, identity: &Pubkey) -> Result<u64> {
        if info.data_len() == 0 {
            return Ok(0);
        }

        require!(
            info.owner == &crate::ID,
            CreditLedgerError::InvalidArgument
        );

        let data = info.try_borrow_data()?;
        let balance = CreditBalance::try_deserialize(&mut data.as_ref())?;
        require_keys_eq!(balance.holder, *identity, CreditLedgerError::InvalidArgument);

        Ok(balance.amount)
    }

    /// Moves `amount` from this balance into `to`, which belongs to `recipient`.
    pub fn transfer_to(
        &mut self,
        to: &mut CreditBalance,
        recipient: &Pubkey,
        amount: u64,
    ) -> core::result::Result<(), CreditLedgerError> {
        if amount == 0 || *recipient == Pubkey::default() || *recipient == self.holder {
            return Err(CreditLedgerError::InvalidArgument);
        }
        if to.holder != Pubkey::default() && to.holder != *recipient {
            return Err(CreditLedgerError::InvalidArgument);
        }

        let new_from = self
            .amount
            .checked_sub(amount)
            .ok_or(CreditLedgerError::InsufficientBalance)?;
        let new_to = to
            .amount
            .checked_add(amount)
            .ok_or(CreditLedgerError::ArithmeticOverflow)?;

        self.amount = new_from;
        to.holder = *recipient;
        to.amount = new_to;
        Ok(())
    }
}
