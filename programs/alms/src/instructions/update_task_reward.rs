use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, Token2022, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::{Task, TaskStatus};

// Increases settle immediately; decreases are two-phase behind a time lock so
// an assignee browsing the task can't have the reward yanked out from under
// them mid-application.

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct UpdateTaskReward<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump
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
        mut,
        associated_token::mint = mint,
        associated_token::authority = creator,
        associated_token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
}

pub fn update_task_reward(
    ctx: Context<UpdateTaskReward>,
    _task_id: String,
    new_reward_amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let creator_key = ctx.accounts.creator.key();

    let can_modify = ctx.accounts.task.can_modify(&creator_key);
    let can_initiate_decrease = ctx.accounts.task.can_initiate_decrease(&creator_key);
    let current_reward = ctx.accounts.task.reward_amount;

    require!(can_modify, AlmsError::UnauthorizedTaskCreator);
    require!(new_reward_amount > 0, AlmsError::InvalidRewardAmount);

    if new_reward_amount > current_reward {
        // Increase: top up escrow immediately
        let additional = new_reward_amount - current_reward;
        require!(
            ctx.accounts.creator_token_account.amount >= additional,
            AlmsError::InsufficientBalance
        );

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
            additional,
            ctx.accounts.mint.decimals,
        )?;

        let task = &mut ctx.accounts.task;
        // An increase supersedes any decrease still pending
        if task.pending_decrease_amount.is_some() {
            task.cancel_decrease(clock.unix_timestamp);
        }
        task.reward_amount = new_reward_amount;
        task.updated_at = clock.unix_timestamp;

        msg!("Task reward increased to {}", new_reward_amount);
    } else if new_reward_amount < current_reward {
        require!(
            can_initiate_decrease,
            AlmsError::CannotDecreaseRewardInvalidStatus
        );

        let task = &mut ctx.accounts.task;
        task.request_decrease(new_reward_amount, clock.unix_timestamp);

        msg!(
            "Decrease to {} requested, executable in {} hours",
            new_reward_amount,
            DECREASE_TIME_LOCK_SECS / 3600
        );
    } else {
        let task = &mut ctx.accounts.task;
        task.updated_at = clock.unix_timestamp;
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct ExecutePendingDecrease<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump
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
        mut,
        associated_token::mint = mint,
        associated_token::authority = creator,
        associated_token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
}

/// After the time lock, settle the pending decrease: refund the difference
/// from escrow and record the new reward amount.
pub fn execute_pending_decrease(
    ctx: Context<ExecutePendingDecrease>,
    task_id: String,
) -> Result<()> {
    let clock = Clock::get()?;

    let task = &ctx.accounts.task;
    let pending = task.pending_decrease_amount;

    // Status transitions clear pending decreases, so this only holds while
    // the task is still Created; checked anyway so escrow already committed
    // to assignees can never be clawed back.
    require!(
        task.status == TaskStatus::Created,
        AlmsError::CannotDecreaseRewardInvalidStatus
    );
    require!(pending.is_some(), AlmsError::NoPendingDecrease);
    require!(
        task.can_execute_decrease(clock.unix_timestamp),
        AlmsError::DecreaseTimeLockNotMet
    );

    let new_reward_amount = pending.unwrap();
    let refund = task.reward_amount - new_reward_amount;
    require!(
        ctx.accounts.escrow_token_account.amount >= refund,
        AlmsError::InsufficientEscrowBalance
    );

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
                to: ctx.accounts.creator_token_account.to_account_info(),
                authority: ctx.accounts.task.to_account_info(),
            },
            signer_seeds,
        ),
        refund,
        ctx.accounts.mint.decimals,
    )?;

    let task = &mut ctx.accounts.task;
    task.execute_decrease(clock.unix_timestamp);

    msg!("Pending decrease executed, new reward {}", new_reward_amount);

    Ok(())
}

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct CancelPendingDecrease<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump
    )]
    pub task: Account<'info, Task>,

    pub creator: Signer<'info>,
}

pub fn cancel_pending_decrease(
    ctx: Context<CancelPendingDecrease>,
    _task_id: String,
) -> Result<()> {
    let clock = Clock::get()?;

    // Creator and status are checked separately: a non-Created task simply
    // has no pending decrease left to cancel.
    require!(
        ctx.accounts.task.creator == ctx.accounts.creator.key(),
        AlmsError::UnauthorizedTaskCreator
    );
    require!(
        ctx.accounts.task.pending_decrease_amount.is_some(),
        AlmsError::NoPendingDecrease
    );

    let task = &mut ctx.accounts.task;
    task.cancel_decrease(clock.unix_timestamp);

    msg!("Pending decrease cancelled");

    Ok(())
}
