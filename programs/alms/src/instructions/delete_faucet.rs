use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::{close_account, CloseAccount},
    token_interface::{self, Burn, Mint, Token2022, TokenAccount},
};

use crate::errors::AlmsError;
use crate::state::Faucet;

// ── Delete (vault must already be empty) ──────────────────────────────────────

#[derive(Accounts)]
#[instruction(faucet_seed: String)]
pub struct DeleteFaucet<'info> {
    #[account(
        mut,
        seeds = [faucet_seed.as_bytes()],
        bump = faucet.bump,
        close = payer
    )]
    pub faucet: Account<'info, Faucet>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub faucet_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The faucet PDA holds the close authority, so the mint account itself
    /// can be reclaimed along with everything else.
    #[account(
        mut,
        address = faucet.mint,
        extensions::close_authority::authority = faucet,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Tear down an empty faucet: close the vault, the mint, and the faucet PDA,
/// returning all rent to the payer.
pub fn delete_faucet(ctx: Context<DeleteFaucet>, faucet_seed: String) -> Result<()> {
    require!(
        ctx.accounts.faucet_token_account.amount == 0,
        AlmsError::FaucetNotEmpty
    );

    let faucet_bump = ctx.accounts.faucet.bump;
    let seeds = &[faucet_seed.as_bytes(), &[faucet_bump]];
    let signer_seeds = &[&seeds[..]];

    close_vault_and_mint(
        ctx.accounts.faucet_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.faucet.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    msg!("Faucet deleted");
    Ok(())
}

// ── Burn remaining supply, then delete ────────────────────────────────────────

#[derive(Accounts)]
#[instruction(faucet_seed: String)]
pub struct BurnAndDeleteFaucet<'info> {
    #[account(
        mut,
        seeds = [faucet_seed.as_bytes()],
        bump = faucet.bump,
        close = payer
    )]
    pub faucet: Account<'info, Faucet>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub faucet_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = faucet.mint,
        extensions::close_authority::authority = faucet,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Burn whatever supply is left in the vault, then tear the faucet down.
pub fn burn_and_delete_faucet(ctx: Context<BurnAndDeleteFaucet>, faucet_seed: String) -> Result<()> {
    let vault_balance = ctx.accounts.faucet_token_account.amount;

    let faucet_bump = ctx.accounts.faucet.bump;
    let seeds = &[faucet_seed.as_bytes(), &[faucet_bump]];
    let signer_seeds = &[&seeds[..]];

    if vault_balance > 0 {
        token_interface::burn(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: ctx.accounts.faucet_token_account.to_account_info(),
                    authority: ctx.accounts.faucet.to_account_info(),
                },
                signer_seeds,
            ),
            vault_balance,
        )?;
        msg!("Burned {} remaining tokens", vault_balance);
    }

    close_vault_and_mint(
        ctx.accounts.faucet_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.faucet.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    msg!("Faucet burned and deleted");
    Ok(())
}

// ── Shared teardown ───────────────────────────────────────────────────────────

fn close_vault_and_mint<'info>(
    vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    faucet: AccountInfo<'info>,
    payer: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    // Vault first — the mint cannot close while token accounts reference it
    // with a non-zero balance, and rent goes to the payer either way.
    token_interface::close_account(CpiContext::new_with_signer(
        token_program.clone(),
        token_interface::CloseAccount {
            account: vault,
            destination: payer.clone(),
            authority: faucet.clone(),
        },
        signer_seeds,
    ))?;

    // The mint closes via the Token-2022 close-authority extension.
    close_account(CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: mint,
            destination: payer,
            authority: faucet,
        },
        signer_seeds,
    ))?;

    Ok(())
}
