use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for reading a balance
 *
 * The balance account may not exist yet, in which case the balance is zero.
 */
#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct BalanceOf<'info> {
    /// The ledger to read from
    pub ledger: Account<'info, LedgerState>,

    /// Balance of the identity
    /// - Derived from: ["balance", ledger_key, identity]
    /// CHECK: Address is fixed by seeds; contents are validated before use
    #[account(
        seeds = [BALANCE_SEED.as_bytes(), ledger.key().as_ref(), identity.as_ref()],
        bump
    )]
    pub balance: UncheckedAccount<'info>,
}

/**
 * Returns the credit held by `identity`
 *
 * @param ctx - The account context containing ledger and balance accounts
 * @param identity - Identity whose balance is read
 */
pub fn handle_balance_of(ctx: Context<BalanceOf>, identity: Pubkey) -> Result<u64> {
    CreditBalance::load_amount(&ctx.accounts.balance, &identity)
}
