use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};

/// Top up `account` to rent exemption for its current data length.
///
/// Initializing the Token-2022 metadata extension grows the mint account
/// after its rent was paid, so the payer covers the difference here.
pub fn update_account_lamports_to_minimum_balance<'info>(
    account: AccountInfo<'info>,
    payer: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
) -> Result<()> {
    let minimum = Rent::get()?.minimum_balance(account.data_len());
    let extra_lamports = minimum.saturating_sub(account.lamports());
    if extra_lamports > 0 {
        invoke(
            &system_instruction::transfer(payer.key, account.key, extra_lamports),
            &[payer, account, system_program],
        )?;
    }
    Ok(())
}
