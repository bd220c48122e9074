pub mod assign_task;
pub mod burn_tokens;
pub mod cancel_task;
pub mod claim_reward;
pub mod close_task;
pub mod create_task;
pub mod delete_faucet;
pub mod initialize_faucet;
pub mod request_tokens;
pub mod update_task_reward;
pub mod update_task_status;

// ── Shared helpers ─────────────────────────────────────────────────────────────

/// Per-assignee share of a task reward — integer division truncates; the last
/// claimant drains whatever remains in escrow so nothing is stranded.
pub fn reward_share(reward_amount: u64, assignee_count: u64) -> u64 {
    if assignee_count == 0 {
        return 0;
    }
    reward_amount / assignee_count
}

/// Task IDs double as PDA seed material and URL fragments in the marketplace,
/// so only alphanumerics, underscore, and hyphen are accepted.
pub fn is_valid_task_id(task_id: &str) -> bool {
    !task_id.is_empty()
        && task_id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_splits_evenly() {
        assert_eq!(reward_share(900, 3), 300);
        assert_eq!(reward_share(1_000_000, 1), 1_000_000);
    }

    #[test]
    fn share_truncates_remainder() {
        // 1000 / 3 = 333 each; the final claimant picks up the extra 1
        assert_eq!(reward_share(1_000, 3), 333);
        assert_eq!(reward_share(7, 10), 0);
    }

    #[test]
    fn share_with_no_assignees_is_zero() {
        assert_eq!(reward_share(1_000, 0), 0);
    }

    #[test]
    fn task_id_charset() {
        assert!(is_valid_task_id("task-42_final"));
        assert!(is_valid_task_id("A1"));
        assert!(!is_valid_task_id(""));
        assert!(!is_valid_task_id("has space"));
        assert!(!is_valid_task_id("semi;colon"));
        assert!(!is_valid_task_id("slash/id"));
    }
}
