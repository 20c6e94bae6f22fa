use anchor_lang::prelude::*;
use credit_ledger::cpi::accounts::Issue;

/// Issues credit on the ledger program with the distributor PDA as issuer
pub fn issue_credit<'a>(
    ledger_program: AccountInfo<'a>,
    ledger: AccountInfo<'a>,
    recipient_balance: AccountInfo<'a>,
    recipient: AccountInfo<'a>,
    issuer: AccountInfo<'a>,
    payer: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = Issue {
        ledger,
        recipient_balance,
        recipient,
        issuer,
        payer,
        system_program,
    };

    credit_ledger::cpi::issue(
        CpiContext::new_with_signer(ledger_program, cpi_accounts, signer_seeds),
        amount,
    )
}
