use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, CloseAccount, Mint, Token2022, TokenAccount, TransferChecked},
};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::instructions::reward_share;
use crate::state::{RewardClaimed, Task, TaskStatus};

/// Shared by `claim_reward` and `complete_task` — both end in a payout to the
/// signing assignee.
#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct ClaimReward<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), task.creator.as_ref()],
        bump = task.bump,
    )]
    pub task: Account<'info, Task>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = task,
        associated_token::token_program = token_program,
    )]
    pub escrow_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = assignee,
        associated_token::mint = mint,
        associated_token::authority = assignee,
        associated_token::token_program = token_program,
    )]
    pub assignee_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Receives the escrow account's rent when the last share is
    /// claimed; validated against the task's stored creator.
    #[account(
        mut,
        constraint = creator.key() == task.creator @ AlmsError::InvalidCreator
    )]
    pub creator: UncheckedAccount<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub assignee: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Claim a share of an already-completed task.
pub fn claim_reward(ctx: Context<ClaimReward>, task_id: String) -> Result<()> {
    require!(
        ctx.accounts.task.status == TaskStatus::Completed,
        AlmsError::InvalidTaskStatus
    );
    pay_share(ctx, &task_id)
}

/// Assignee marks the task completed and claims their share in one step.
pub fn complete_task(ctx: Context<ClaimReward>, task_id: String) -> Result<()> {
    let clock = Clock::get()?;
    {
        let task = &mut ctx.accounts.task;
        require!(task.can_complete(), AlmsError::InvalidTaskStatus);
        require!(!task.assignees.is_empty(), AlmsError::NoAssignee);
        task.update_status(TaskStatus::Completed, clock.unix_timestamp);
    }
    pay_share(ctx, &task_id)
}

fn pay_share(ctx: Context<ClaimReward>, task_id: &str) -> Result<()> {
    let clock = Clock::get()?;
    let claimant = ctx.accounts.assignee.key();

    let task = &ctx.accounts.task;
    require!(task.is_assignee(&claimant), AlmsError::UnauthorizedAssignee);
    require!(!task.has_claimed(&claimant), AlmsError::AlreadyClaimed);

    let assignee_count = task.assignees.len() as u64;
    let claims_after = task.claimed.len() as u64 + 1;
    let is_last = claims_after == assignee_count;

    let escrow_balance = ctx.accounts.escrow_token_account.amount;
    // The last claimant drains the escrow exactly; earlier claimants take the
    // even share and leave the truncation remainder behind.
    let amount = if is_last {
        escrow_balance
    } else {
        reward_share(task.reward_amount, assignee_count)
    };
    require!(escrow_balance >= amount, AlmsError::InsufficientEscrowBalance);

    let creator_key = task.creator;
    let task_bump = task.bump;
    let seeds = &[
        TASK_SEED,
        task_id.as_bytes(),
        creator_key.as_ref(),
        &[task_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.escrow_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.assignee_token_account.to_account_info(),
                authority: ctx.accounts.task.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    // Fully drained — return the escrow account's rent to the creator.
    // The task account itself stays until close_task reclaims it.
    if is_last {
        token_interface::close_account(CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            CloseAccount {
                account: ctx.accounts.escrow_token_account.to_account_info(),
                destination: ctx.accounts.creator.to_account_info(),
                authority: ctx.accounts.task.to_account_info(),
            },
            signer_seeds,
        ))?;
    }

    let task = &mut ctx.accounts.task;
    task.claimed.push(claimant);
    task.updated_at = clock.unix_timestamp;

    emit!(RewardClaimed {
        task_id: task.task_id.clone(),
        assignee: claimant,
        amount,
        remaining: assignee_count - claims_after,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
