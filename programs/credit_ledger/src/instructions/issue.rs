use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for issuing new credit
 *
 * Creates `amount` new credit in the recipient's balance. The ledger checks the
 * supply cap itself on every call and does not rely on any accounting done by
 * the issuer.
 *
 * Access Control: Registered issuer only (usually a program PDA signing via CPI)
 */
#[derive(Accounts)]
pub struct Issue<'info> {
    /// The ledger to issue from
    /// - Will be modified to grow total_supply
    #[account(mut)]
    pub ledger: Account<'info, LedgerState>,

    /// Balance of the recipient
    /// - Derived from: ["balance", ledger_key, recipient_key]
    /// - Created on first credit
    #[account(
        init_if_needed,
        payer = payer,
        space = CreditBalance::LEN,
        seeds = [BALANCE_SEED.as_bytes(), ledger.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, CreditBalance>,

    /// The identity receiving the credit
    /// CHECK: Any address can hold credit; the default key is rejected in the handler
    pub recipient: UncheckedAccount<'info>,

    /// The registered issuer
    pub issuer: Signer<'info>,

    /// Pays for the balance account when it does not exist yet
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Issues new credit to a recipient
 *
 * @param ctx - The account context containing ledger, balance and issuer accounts
 * @param amount - Amount of credit to create
 *
 * Validation Process:
 * 1. Caller must be the registered issuer
 * 2. Recipient must not be the default key and amount must be non-zero
 * 3. total_supply + amount must not exceed supply_cap
 */
pub fn handle_issue(ctx: Context<Issue>, amount: u64) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();
    let issuer = ctx.accounts.issuer.key();
    let ledger_key = ctx.accounts.ledger.key();

    let ledger = &mut ctx.accounts.ledger;
    let total_supply = ledger.issue(
        &issuer,
        &mut ctx.accounts.recipient_balance,
        &recipient,
        amount,
    )?;

    msg!(
        "Issued {} to {} (supply {}/{})",
        amount,
        recipient,
        total_supply,
        ledger.supply_cap
    );

    emit!(Transfer {
        ledger: ledger_key,
        from: MINT_ORIGIN,
        to: recipient,
        amount,
    });

    Ok(())
}
