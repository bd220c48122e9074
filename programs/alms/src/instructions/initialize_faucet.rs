use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        self, token_metadata_initialize, Mint, MintTo, Token2022, TokenAccount,
        TokenMetadataInitialize,
    },
};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::Faucet;
use crate::utils::update_account_lamports_to_minimum_balance;

/// One-time setup for a faucet identified by `faucet_seed`.
///
/// Creates the Faucet PDA, a Token-2022 mint with metadata-pointer and
/// close-authority extensions (all authorities = the faucet PDA), and the
/// faucet's vault ATA.  A second call with the same seed fails on `init`.
#[derive(Accounts)]
#[instruction(faucet_seed: String)]
pub struct InitializeFaucet<'info> {
    #[account(
        init,
        payer = payer,
        space = Faucet::SPACE,
        seeds = [faucet_seed.as_bytes()],
        bump
    )]
    pub faucet: Account<'info, Faucet>,

    /// The ALMS mint — metadata lives inside the mint account itself via the
    /// metadata-pointer extension, and the faucet PDA can close it later.
    #[account(
        init,
        payer = payer,
        mint::decimals = DECIMALS,
        mint::authority = faucet,
        mint::token_program = token_program,
        extensions::metadata_pointer::authority = faucet,
        extensions::metadata_pointer::metadata_address = mint,
        extensions::close_authority::authority = faucet,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault — receives the initial supply and funds every request.
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub faucet_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeFaucet>,
    faucet_seed: String,
    name: String,
    symbol: String,
    uri: String,
    initial_supply: u64,
) -> Result<()> {
    require!(faucet_seed.len() <= MAX_FAUCET_SEED_LEN, AlmsError::DescriptionTooLong);
    require!(name.len() <= MAX_NAME_LEN, AlmsError::DescriptionTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, AlmsError::DescriptionTooLong);
    require!(uri.len() <= MAX_URI_LEN, AlmsError::DescriptionTooLong);

    let mint_key = ctx.accounts.mint.key();
    let faucet_key = ctx.accounts.faucet.key();
    let vault_key = ctx.accounts.faucet_token_account.key();
    let faucet_bump = ctx.bumps.faucet;

    let faucet = &mut ctx.accounts.faucet;
    faucet.mint = mint_key;
    faucet.authority = faucet_key;
    faucet.token_account = vault_key;
    faucet.rate_limit = RATE_LIMIT;
    faucet.cooldown_period = COOLDOWN_SECS;
    faucet.bump = faucet_bump;

    // Faucet PDA signs metadata init and the initial mint
    let seeds = &[faucet_seed.as_bytes(), &[faucet_bump]];
    let signer_seeds = &[&seeds[..]];

    token_metadata_initialize(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TokenMetadataInitialize {
                program_id: ctx.accounts.token_program.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                metadata: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.faucet.to_account_info(),
                update_authority: ctx.accounts.faucet.to_account_info(),
            },
            signer_seeds,
        ),
        name,
        symbol,
        uri,
    )?;

    // Writing metadata grew the mint account past its funded rent
    update_account_lamports_to_minimum_balance(
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    )?;

    if initial_supply > 0 {
        token_interface::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.faucet_token_account.to_account_info(),
                    authority: ctx.accounts.faucet.to_account_info(),
                },
                signer_seeds,
            ),
            initial_supply,
        )?;
    }

    msg!("Faucet initialized: mint {} supply {}", mint_key, initial_supply);

    Ok(())
}
