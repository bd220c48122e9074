use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::{Task, TaskStatus, TaskStatusChanged};

#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct UpdateTaskStatus<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump,
        constraint = task.creator == creator.key() @ AlmsError::UnauthorizedTaskCreator,
    )]
    pub task: Account<'info, Task>,

    pub creator: Signer<'info>,
}

/// Creator-driven status move.
///
/// Legal moves are Created → InProgress and Created/InProgress → Completed.
/// `Cancelled` is rejected here because cancellation must refund escrow —
/// that path is `cancel_task`.
pub fn handler(
    ctx: Context<UpdateTaskStatus>,
    _task_id: String,
    new_status: TaskStatus,
) -> Result<()> {
    let task = &mut ctx.accounts.task;
    let clock = Clock::get()?;

    require!(
        task.status.can_transition_to(new_status),
        AlmsError::InvalidTaskStatus
    );
    if new_status == TaskStatus::Completed {
        require!(!task.assignees.is_empty(), AlmsError::NoAssignee);
    }

    task.update_status(new_status, clock.unix_timestamp);

    emit!(TaskStatusChanged {
        task_id: task.task_id.clone(),
        creator: task.creator,
        status: new_status,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
