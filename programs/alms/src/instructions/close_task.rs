use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::Task;

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct CloseTask<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump,
        close = creator,
        constraint = task.creator == creator.key() @ AlmsError::UnauthorizedTaskCreator,
    )]
    pub task: Account<'info, Task>,

    #[account(mut)]
    pub creator: Signer<'info>,
}

/// Reclaim the task account's rent once the escrow is fully settled: either
/// the task was cancelled (escrow refunded and closed) or every assignee has
/// claimed (escrow drained and closed).
pub fn handler(ctx: Context<CloseTask>, task_id: String) -> Result<()> {
    require!(ctx.accounts.task.is_settled(), AlmsError::TaskNotSettled);

    msg!("Task {} closed, rent returned to creator", task_id);

    Ok(())
}
