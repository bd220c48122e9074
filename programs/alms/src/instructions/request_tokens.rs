use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, Token2022, TokenAccount, TransferChecked},
};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::{Faucet, TokensRequested, UserRequestRecord};

/// Request tokens from the faucet.
///
///   - Amount capped at `faucet.rate_limit` per request
///   - One request per `faucet.cooldown_period` per wallet
///   - Recipient ATA is created on first request
#[derive(Accounts)]
#[instruction(faucet_seed: String)]
pub struct RequestTokens<'info> {
    #[account(
        seeds = [faucet_seed.as_bytes()],
        bump = faucet.bump
    )]
    pub faucet: Account<'info, Faucet>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = faucet,
        associated_token::token_program = token_program,
    )]
    pub faucet_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Cooldown record — created on first request, reused afterwards.
    /// Seeds: [b"user_record", user.key()]
    #[account(
        init_if_needed,
        payer = user,
        space = UserRequestRecord::SPACE,
        seeds = [USER_RECORD_SEED, user.key().as_ref()],
        bump
    )]
    pub user_request_record: Account<'info, UserRequestRecord>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(address = faucet.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RequestTokens>, faucet_seed: String, amount: u64) -> Result<()> {
    let faucet = &ctx.accounts.faucet;
    let clock = Clock::get()?;

    require!(amount > 0, AlmsError::InvalidRewardAmount);
    require!(amount <= faucet.rate_limit, AlmsError::RequestAmountTooHigh);
    require!(
        ctx.accounts.faucet_token_account.amount >= amount,
        AlmsError::InsufficientFaucetBalance
    );

    require!(
        ctx.accounts
            .user_request_record
            .cooldown_elapsed(faucet.cooldown_period, clock.unix_timestamp),
        AlmsError::CooldownNotMet
    );

    let faucet_bump = faucet.bump;
    let seeds = &[faucet_seed.as_bytes(), &[faucet_bump]];
    let signer_seeds = &[&seeds[..]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.faucet_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.faucet.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    let record = &mut ctx.accounts.user_request_record;
    record.user = ctx.accounts.user.key();
    record.last_request = clock.unix_timestamp;
    record.total_received = record
        .total_received
        .checked_add(amount)
        .ok_or(AlmsError::ArithmeticOverflow)?;
    record.request_count = record
        .request_count
        .checked_add(1)
        .ok_or(AlmsError::ArithmeticOverflow)?;
    record.bump = ctx.bumps.user_request_record;

    emit!(TokensRequested {
        user: record.user,
        amount,
        total_received: record.total_received,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
