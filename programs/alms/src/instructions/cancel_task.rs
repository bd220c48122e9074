use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, CloseAccount, Mint, Token2022, TokenAccount, TransferChecked,
};

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::{Task, TaskCancelled, TaskStatus};

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct CancelTask<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump,
        constraint = task.creator == creator.key() @ AlmsError::UnauthorizedTaskCreator,
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

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token2022>,
}

/// Cancel a task: refund whatever remains in escrow to the creator, close the
/// escrow account, and mark the task `Cancelled`.  The task account stays
/// around as a record until `close_task` reclaims it.
pub fn handler(ctx: Context<CancelTask>, task_id: String) -> Result<()> {
    let clock = Clock::get()?;
    let task = &ctx.accounts.task;

    require!(
        task.can_cancel(&ctx.accounts.creator.key()),
        AlmsError::InvalidTaskStatus
    );

    let refund = ctx.accounts.escrow_token_account.amount;
    let creator_key = task.creator;
    let task_bump = task.bump;
    let seeds = &[
        TASK_SEED,
        task_id.as_bytes(),
        creator_key.as_ref(),
        &[task_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    if refund > 0 {
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
    }

    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow_token_account.to_account_info(),
            destination: ctx.accounts.creator.to_account_info(),
            authority: ctx.accounts.task.to_account_info(),
        },
        signer_seeds,
    ))?;

    let task = &mut ctx.accounts.task;
    task.update_status(TaskStatus::Cancelled, clock.unix_timestamp);

    emit!(TaskCancelled {
        task_id: task.task_id.clone(),
        creator: creator_key,
        refunded: refund,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
