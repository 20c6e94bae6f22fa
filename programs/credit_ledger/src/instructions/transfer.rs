use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for moving credit between holders
 *
 * Access Control: Holder of the sending balance only (enforced by PDA seeds)
 */
#[derive(Accounts)]
pub struct TransferCredit<'info> {
    /// The ledger both balances belong to
    pub ledger: Account<'info, LedgerState>,

    /// Balance of the sender
    /// - Derived from: ["balance", ledger_key, holder_key]
    #[account(
        mut,
        seeds = [BALANCE_SEED.as_bytes(), ledger.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub sender_balance: Account<'info, CreditBalance>,

    /// Balance of the recipient
    /// - Derived from: ["balance", ledger_key, recipient_key]
    /// - Created on first credit, paid by the sender
    #[account(
        init_if_needed,
        payer = holder,
        space = CreditBalance::LEN,
        seeds = [BALANCE_SEED.as_bytes(), ledger.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, CreditBalance>,

    /// The identity receiving the credit
    /// CHECK: Any address other than the sender can hold credit
    #[account(constraint = recipient.key() != holder.key() @ CreditLedgerError::InvalidArgument)]
    pub recipient: UncheckedAccount<'info>,

    /// The holder sending the credit
    #[account(mut)]
    pub holder: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Transfers credit from the signing holder to a recipient
 *
 * @param ctx - The account context containing both balances
 * @param amount - Amount of credit to move
 *
 * Total supply is unchanged, so the sum of balances keeps matching it.
 */
pub fn handle_transfer(ctx: Context<TransferCredit>, amount: u64) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();
    let holder = ctx.accounts.holder.key();

    let sender_balance = &mut ctx.accounts.sender_balance;
    sender_balance.transfer_to(&mut ctx.accounts.recipient_balance, &recipient, amount)?;

    emit!(Transfer {
        ledger: ctx.accounts.ledger.key(),
        from: holder,
        to: recipient,
        amount,
    });

    Ok(())
}
