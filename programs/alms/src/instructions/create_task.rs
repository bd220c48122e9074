use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, Token2022, TokenAccount, TransferChecked},
};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::instructions::is_valid_task_id;
use crate::state::{Task, TaskCreated, TaskStatus};

/// Create a task and escrow its reward.
///
/// The task PDA is the authority over a fresh escrow ATA; the full reward
/// moves from the creator into escrow up front, so assignees never depend on
/// the creator's balance at payout time.
#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct CreateTask<'info> {
    #[account(
        init,
        payer = creator,
        space = Task::SPACE,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub task: Account<'info, Task>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = task,
        associated_token::token_program = token_program,
    )]
    pub escrow_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = creator,
        associated_token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateTask>,
    task_id: String,
    description: String,
    reward_amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    require!(task_id.len() <= MAX_TASK_ID_LEN, AlmsError::TaskIdTooLong);
    require!(is_valid_task_id(&task_id), AlmsError::InvalidTaskIdFormat);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        AlmsError::DescriptionTooLong
    );
    require!(reward_amount > 0, AlmsError::InvalidRewardAmount);
    require!(
        ctx.accounts.creator_token_account.amount >= reward_amount,
        AlmsError::InsufficientBalance
    );

    let task = &mut ctx.accounts.task;
    task.task_id = task_id.clone();
    task.description = description;
    task.reward_amount = reward_amount;
    task.status = TaskStatus::Created;
    task.creator = ctx.accounts.creator.key();
    task.escrow_account = ctx.accounts.escrow_token_account.key();
    task.assignees = Vec::new();
    task.claimed = Vec::new();
    task.created_at = clock.unix_timestamp;
    task.updated_at = clock.unix_timestamp;
    task.pending_decrease_amount = None;
    task.decrease_requested_at = None;
    task.bump = ctx.bumps.task;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.creator_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.escrow_token_account.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        reward_amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(TaskCreated {
        task_id,
        creator: ctx.accounts.creator.key(),
        reward_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
