use anchor_lang::prelude::*;

use crate::constants::*;

/// Faucet account — PDA seeds: [faucet_seed]
///
/// Holds the mint, its vault token account, and the dispensing policy. The
/// PDA itself is the mint/close authority and the vault authority, so the
/// program can sign transfers and burns without a private key.
#[account]
pub struct Faucet {
    /// The Token-2022 mint this faucet controls
    pub mint: Pubkey,

    /// Authority over the mint and vault (this PDA)
    pub authority: Pubkey,

    /// Vault token account holding undistributed supply
    pub token_account: Pubkey,

    /// Maximum raw tokens per request
    pub rate_limit: u64,

    /// Seconds a wallet must wait between requests
    pub cooldown_period: i64,

    /// Canonical bump for cheap PDA re-derivation
    pub bump: u8,
}

impl Faucet {
    pub const SPACE: usize = 8 + 32 + 32 + 32 + 8 + 8 + 1;
}

/// Per-wallet request accounting — PDA seeds: [b"user_record", user.key()]
///
/// Created on a wallet's first request; the stored timestamp enforces the
/// cooldown and the totals feed the dashboard.
#[account]
pub struct UserRequestRecord {
    /// Wallet that requested
    pub user: Pubkey,

    /// Unix timestamp of the last successful request
    pub last_request: i64,

    /// Lifetime raw tokens received from the faucet
    pub total_received: u64,

    /// Number of successful requests
    pub request_count: u32,

    /// Canonical bump
    pub bump: u8,
}

impl UserRequestRecord {
    pub const SPACE: usize = 8 + 32 + 8 + 8 + 4 + 1;

    /// True when this wallet may request again. A zero `last_request` marks a
    /// freshly created record, so the first request always passes.
    pub fn cooldown_elapsed(&self, cooldown_period: i64, now: i64) -> bool {
        self.last_request == 0 || now - self.last_request >= cooldown_period
    }
}

/// Task lifecycle states.
///
/// Cancellation moves escrow funds, so `Cancelled` is only reachable through
/// `cancel_task`, never through a bare status update.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Created,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Status moves allowed via `update_task_status`.
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Created, TaskStatus::InProgress)
                | (TaskStatus::Created, TaskStatus::Completed)
                | (TaskStatus::InProgress, TaskStatus::Completed)
        )
    }
}

/// Task account — PDA seeds: [b"task", task_id, creator.key()]
///
/// The task PDA is the authority over its escrow token account (an ATA for
/// the faucet mint), so reward payouts and refunds are program-signed.
#[account]
pub struct Task {
    /// Unique identifier within this creator's tasks (≤ 50 chars)
    pub task_id: String,

    /// Free-form description (≤ 500 chars)
    pub description: String,

    /// Total escrowed reward, split evenly across assignees
    pub reward_amount: u64,

    /// Current lifecycle state
    pub status: TaskStatus,

    /// Wallet that created and funds the task
    pub creator: Pubkey,

    /// Escrow token account holding the reward
    pub escrow_account: Pubkey,

    /// Wallets eligible to claim a share (≤ 10)
    pub assignees: Vec<Pubkey>,

    /// Assignees that have already claimed
    pub claimed: Vec<Pubkey>,

    /// Creation timestamp
    pub created_at: i64,

    /// Last state-changing update
    pub updated_at: i64,

    /// Reward amount a pending decrease would settle to
    pub pending_decrease_amount: Option<u64>,

    /// When the pending decrease was requested
    pub decrease_requested_at: Option<i64>,

    /// Canonical bump
    pub bump: u8,
}

impl Task {
    pub const SPACE: usize = 8 + // discriminator
        4 + MAX_TASK_ID_LEN + // task_id
        4 + MAX_DESCRIPTION_LEN + // description
        8 + // reward_amount
        1 + // status
        32 + // creator
        32 + // escrow_account
        4 + 32 * MAX_ASSIGNEES + // assignees
        4 + 32 * MAX_ASSIGNEES + // claimed
        8 + // created_at
        8 + // updated_at
        1 + 8 + // pending_decrease_amount
        1 + 8 + // decrease_requested_at
        1; // bump

    /// Creator may reshape the task (reward changes) only before work starts.
    pub fn can_modify(&self, authority: &Pubkey) -> bool {
        &self.creator == authority && self.status == TaskStatus::Created
    }

    /// An assignee may still drive the task to completion.
    pub fn can_complete(&self) -> bool {
        matches!(self.status, TaskStatus::Created | TaskStatus::InProgress)
    }

    /// Creator may cancel any task that has not reached a terminal state.
    pub fn can_cancel(&self, authority: &Pubkey) -> bool {
        &self.creator == authority
            && !matches!(self.status, TaskStatus::Completed | TaskStatus::Cancelled)
    }

    /// Rent can be reclaimed once the escrow has been fully drained.
    pub fn is_settled(&self) -> bool {
        match self.status {
            TaskStatus::Cancelled => true,
            TaskStatus::Completed => self.all_claimed(),
            _ => false,
        }
    }

    pub fn is_assignee(&self, key: &Pubkey) -> bool {
        self.assignees.contains(key)
    }

    pub fn has_claimed(&self, key: &Pubkey) -> bool {
        self.claimed.contains(key)
    }

    pub fn all_claimed(&self) -> bool {
        !self.assignees.is_empty() && self.claimed.len() == self.assignees.len()
    }

    /// A decrease may only be initiated while the task is still `Created`.
    pub fn can_initiate_decrease(&self, authority: &Pubkey) -> bool {
        self.can_modify(authority)
    }

    /// A pending decrease becomes executable after the time lock elapses.
    pub fn can_execute_decrease(&self, now: i64) -> bool {
        match (self.pending_decrease_amount, self.decrease_requested_at) {
            (Some(_), Some(requested_at)) => now >= requested_at + DECREASE_TIME_LOCK_SECS,
            _ => false,
        }
    }

    pub fn update_status(&mut self, new_status: TaskStatus, now: i64) {
        // A pending decrease is only meaningful while the task is Created;
        // once work starts the escrowed reward is committed to the assignees.
        if new_status != TaskStatus::Created {
            self.pending_decrease_amount = None;
            self.decrease_requested_at = None;
        }
        self.status = new_status;
        self.updated_at = now;
    }

    pub fn request_decrease(&mut self, new_amount: u64, now: i64) {
        self.pending_decrease_amount = Some(new_amount);
        self.decrease_requested_at = Some(now);
        self.updated_at = now;
    }

    pub fn execute_decrease(&mut self, now: i64) {
        if let Some(new_amount) = self.pending_decrease_amount {
            self.reward_amount = new_amount;
        }
        self.pending_decrease_amount = None;
        self.decrease_requested_at = None;
        self.updated_at = now;
    }

    pub fn cancel_decrease(&mut self, now: i64) {
        self.pending_decrease_amount = None;
        self.decrease_requested_at = None;
        self.updated_at = now;
    }
}

// ── Events ────────────────────────────────────────────────────────────────────
// Anchor emits these as log messages that indexers / the dashboard subscribe to.

#[event]
pub struct TokensRequested {
    pub user: Pubkey,
    pub amount: u64,
    pub total_received: u64,
    pub timestamp: i64,
}

#[event]
pub struct TaskCreated {
    pub task_id: String,
    pub creator: Pubkey,
    pub reward_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TaskAssigned {
    pub task_id: String,
    pub creator: Pubkey,
    pub assignees: Vec<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct TaskStatusChanged {
    pub task_id: String,
    pub creator: Pubkey,
    pub status: TaskStatus,
    pub timestamp: i64,
}

#[event]
pub struct RewardClaimed {
    pub task_id: String,
    pub assignee: Pubkey,
    pub amount: u64,
    /// Claims still outstanding after this one
    pub remaining: u64,
    pub timestamp: i64,
}

#[event]
pub struct TaskCancelled {
    pub task_id: String,
    pub creator: Pubkey,
    pub refunded: u64,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(creator: Pubkey) -> Task {
        Task {
            task_id: "task-1".to_string(),
            description: String::new(),
            reward_amount: 900,
            status: TaskStatus::Created,
            creator,
            escrow_account: Pubkey::new_unique(),
            assignees: vec![],
            claimed: vec![],
            created_at: 1_000,
            updated_at: 1_000,
            pending_decrease_amount: None,
            decrease_requested_at: None,
            bump: 255,
        }
    }

    #[test]
    fn status_transitions() {
        use TaskStatus::*;
        assert!(Created.can_transition_to(InProgress));
        assert!(Created.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Completed));

        assert!(!InProgress.can_transition_to(Created));
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Cancelled.can_transition_to(Created));
        // Cancelled is only reachable through cancel_task
        assert!(!Created.can_transition_to(Cancelled));
        assert!(!InProgress.can_transition_to(Cancelled));
    }

    #[test]
    fn modify_rights_are_creator_and_created_only() {
        let creator = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let mut task = sample_task(creator);

        assert!(task.can_modify(&creator));
        assert!(!task.can_modify(&other));

        task.update_status(TaskStatus::InProgress, 2_000);
        assert!(!task.can_modify(&creator));
        assert_eq!(task.updated_at, 2_000);
    }

    #[test]
    fn cancel_rights_stop_at_terminal_states() {
        let creator = Pubkey::new_unique();
        let mut task = sample_task(creator);

        assert!(task.can_cancel(&creator));
        task.update_status(TaskStatus::InProgress, 2_000);
        assert!(task.can_cancel(&creator));

        task.update_status(TaskStatus::Completed, 3_000);
        assert!(!task.can_cancel(&creator));
        task.update_status(TaskStatus::Cancelled, 4_000);
        assert!(!task.can_cancel(&creator));
    }

    #[test]
    fn settlement_requires_all_claims() {
        let creator = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut task = sample_task(creator);
        task.assignees = vec![a, b];
        task.update_status(TaskStatus::Completed, 2_000);

        assert!(!task.is_settled());
        task.claimed.push(a);
        assert!(!task.is_settled());
        task.claimed.push(b);
        assert!(task.is_settled());
    }

    #[test]
    fn cancelled_task_is_settled_without_claims() {
        let creator = Pubkey::new_unique();
        let mut task = sample_task(creator);
        task.update_status(TaskStatus::Cancelled, 2_000);
        assert!(task.is_settled());
    }

    #[test]
    fn decrease_time_lock() {
        let creator = Pubkey::new_unique();
        let mut task = sample_task(creator);

        assert!(!task.can_execute_decrease(10_000));

        task.request_decrease(500, 10_000);
        assert!(!task.can_execute_decrease(10_000));
        assert!(!task.can_execute_decrease(10_000 + DECREASE_TIME_LOCK_SECS - 1));
        assert!(task.can_execute_decrease(10_000 + DECREASE_TIME_LOCK_SECS));

        task.execute_decrease(10_000 + DECREASE_TIME_LOCK_SECS);
        assert_eq!(task.reward_amount, 500);
        assert_eq!(task.pending_decrease_amount, None);
        assert_eq!(task.decrease_requested_at, None);
    }

    #[test]
    fn pending_decrease_cleared_when_work_starts() {
        let creator = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut task = sample_task(creator);
        task.request_decrease(500, 10_000);

        // Assignment moves the task off Created and commits the escrow
        task.assignees = vec![a, b];
        task.update_status(TaskStatus::InProgress, 11_000);
        assert_eq!(task.pending_decrease_amount, None);
        assert_eq!(task.decrease_requested_at, None);
        assert!(!task.can_execute_decrease(i64::MAX));
    }

    #[test]
    fn pending_decrease_cannot_outlive_completion() {
        let creator = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut task = sample_task(creator);
        task.assignees = vec![a, b];
        task.request_decrease(500, 10_000);

        // Even with the time lock long expired, a completed task with claims
        // outstanding must not hand escrow back to the creator
        task.update_status(TaskStatus::Completed, 10_000 + DECREASE_TIME_LOCK_SECS * 2);
        task.claimed.push(a);
        assert!(!task.can_execute_decrease(i64::MAX));
        assert_eq!(task.reward_amount, 900);
    }

    #[test]
    fn cancel_decrease_keeps_reward() {
        let creator = Pubkey::new_unique();
        let mut task = sample_task(creator);
        task.request_decrease(500, 10_000);

        task.cancel_decrease(11_000);
        assert_eq!(task.reward_amount, 900);
        assert_eq!(task.pending_decrease_amount, None);
        assert!(!task.can_execute_decrease(i64::MAX));
    }

    #[test]
    fn cooldown_gates_requests() {
        let record = UserRequestRecord {
            user: Pubkey::new_unique(),
            last_request: 100_000,
            total_received: 1_000,
            request_count: 1,
            bump: 255,
        };

        assert!(!record.cooldown_elapsed(COOLDOWN_SECS, 100_000 + COOLDOWN_SECS - 1));
        assert!(record.cooldown_elapsed(COOLDOWN_SECS, 100_000 + COOLDOWN_SECS));
        assert!(record.cooldown_elapsed(COOLDOWN_SECS, 100_000 + COOLDOWN_SECS + 1));
    }

    #[test]
    fn first_request_skips_cooldown() {
        // init_if_needed zero-initializes the record on first request
        let record = UserRequestRecord {
            user: Pubkey::default(),
            last_request: 0,
            total_received: 0,
            request_count: 0,
            bump: 0,
        };
        assert!(record.cooldown_elapsed(COOLDOWN_SECS, 1));
    }

    #[test]
    fn task_space_fits_max_lengths() {
        // discriminator + every field at its maximum serialized size
        let worst_case = 8
            + (4 + MAX_TASK_ID_LEN)
            + (4 + MAX_DESCRIPTION_LEN)
            + 8
            + 1
            + 32
            + 32
            + (4 + 32 * MAX_ASSIGNEES) * 2
            + 8
            + 8
            + 9
            + 9
            + 1;
        assert_eq!(Task::SPACE, worst_case);
    }
}
