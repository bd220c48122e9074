use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AlmsError;
use crate::state::{Task, TaskAssigned, TaskStatus};

/// Creator-only assignment. One accounts struct serves both the single and
/// multiple variants; only the task PDA is touched.
#[derive(Accounts)]
#[instruction(task_id: String)]
pub struct AssignTask<'info> {
    #[account(
        mut,
        seeds = [TASK_SEED, task_id.as_bytes(), creator.key().as_ref()],
        bump = task.bump,
    )]
    pub task: Account<'info, Task>,

    pub creator: Signer<'info>,
}

/// Attach a single assignee to the task.
pub fn assign_task(ctx: Context<AssignTask>, _task_id: String, assignee: Pubkey) -> Result<()> {
    add_assignees(ctx, vec![assignee])
}

/// Attach several assignees in one call; the reward splits evenly among
/// everyone assigned by claim time.
pub fn assign_task_multiple(
    ctx: Context<AssignTask>,
    _task_id: String,
    assignees: Vec<Pubkey>,
) -> Result<()> {
    add_assignees(ctx, assignees)
}

fn add_assignees(ctx: Context<AssignTask>, assignees: Vec<Pubkey>) -> Result<()> {
    let task = &mut ctx.accounts.task;
    let clock = Clock::get()?;

    require!(!assignees.is_empty(), AlmsError::NoAssignees);
    require!(
        task.creator == ctx.accounts.creator.key(),
        AlmsError::UnauthorizedTaskCreator
    );
    require!(
        matches!(task.status, TaskStatus::Created | TaskStatus::InProgress),
        AlmsError::InvalidTaskStatus
    );
    require!(
        task.assignees.len() + assignees.len() <= MAX_ASSIGNEES,
        AlmsError::TooManyAssignees
    );

    // Pushing as we validate also catches duplicates inside the new batch
    for assignee in assignees {
        require!(assignee != task.creator, AlmsError::CannotAssignToCreator);
        require!(!task.assignees.contains(&assignee), AlmsError::DuplicateAssignee);
        task.assignees.push(assignee);
    }

    if task.status == TaskStatus::Created {
        task.update_status(TaskStatus::InProgress, clock.unix_timestamp);
    } else {
        task.updated_at = clock.unix_timestamp;
    }

    emit!(TaskAssigned {
        task_id: task.task_id.clone(),
        creator: task.creator,
        assignees: task.assignees.clone(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
