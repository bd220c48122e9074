use anchor_lang::prelude::*;

#[error_code]
pub enum AlmsError {
    #[msg("Insufficient faucet balance")]
    InsufficientFaucetBalance,

    #[msg("Request amount exceeds the maximum allowed")]
    RequestAmountTooHigh,

    #[msg("Cooldown period not met")]
    CooldownNotMet,

    #[msg("Invalid reward amount")]
    InvalidRewardAmount,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Insufficient escrow balance")]
    InsufficientEscrowBalance,

    #[msg("Task ID too long (max 50 characters)")]
    TaskIdTooLong,

    #[msg("Invalid task ID format")]
    InvalidTaskIdFormat,

    #[msg("Description too long (max 500 characters)")]
    DescriptionTooLong,

    #[msg("Unauthorized: only the task creator can perform this action")]
    UnauthorizedTaskCreator,

    #[msg("Invalid task status for this operation")]
    InvalidTaskStatus,

    #[msg("Cannot complete task: no assignee")]
    NoAssignee,

    #[msg("No assignees provided")]
    NoAssignees,

    #[msg("Too many assignees (max 10 allowed)")]
    TooManyAssignees,

    #[msg("Duplicate assignee detected")]
    DuplicateAssignee,

    #[msg("Cannot assign task to creator")]
    CannotAssignToCreator,

    #[msg("Unauthorized assignee")]
    UnauthorizedAssignee,

    #[msg("Assignee has already claimed their reward")]
    AlreadyClaimed,

    #[msg("Cannot decrease reward: task status must be Created")]
    CannotDecreaseRewardInvalidStatus,

    #[msg("Time lock period not met for reward decrease")]
    DecreaseTimeLockNotMet,

    #[msg("No pending decrease found")]
    NoPendingDecrease,

    #[msg("Invalid creator")]
    InvalidCreator,

    #[msg("Task is not settled: escrow must be fully claimed or refunded")]
    TaskNotSettled,

    #[msg("Cannot delete faucet: token account must be empty")]
    FaucetNotEmpty,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
