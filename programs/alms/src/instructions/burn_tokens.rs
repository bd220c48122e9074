use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Burn, Mint, Token2022, TokenAccount};

use crate::errors::AlmsError;

/// Burn tokens from the caller's own account.
///
/// Backs the dashboard's "burn my tokens" action; the user signs as the
/// token-account authority, so no PDA is involved.
#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
}

pub fn handler(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, AlmsError::InvalidRewardAmount);
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        AlmsError::InsufficientBalance
    );

    token_interface::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Burned {} tokens from {}", amount, ctx.accounts.user.key());

    Ok(())
}
