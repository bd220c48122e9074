//! alms — token faucet and task escrow for the volunteer marketplace.
//!
//! Two subsystems share one Token-2022 mint:
//!
//! * **Faucet** — a PDA-owned mint and vault dispensing a rate-limited,
//!   cooldown-gated allowance of ALMS to any wallet.
//! * **Task escrow** — per-task PDAs escrowing reward tokens from a creator,
//!   with assignment, a creator-controlled status machine, time-locked reward
//!   decreases, and evenly split payout claims.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::assign_task::*;
use instructions::burn_tokens::*;
use instructions::cancel_task::*;
use instructions::claim_reward::*;
use instructions::close_task::*;
use instructions::create_task::*;
use instructions::delete_faucet::*;
use instructions::initialize_faucet::*;
use instructions::request_tokens::*;
use instructions::update_task_reward::*;
use instructions::update_task_status::*;

use state::TaskStatus;

// PLACEHOLDER — after first `anchor build`, run:
//   anchor keys list
// then replace this ID with the one shown for alms.
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod alms {
    use super::*;

    // ── Faucet ────────────────────────────────────────────────────────────────

    /// One-time setup per seed: creates the faucet PDA, a Token-2022 mint
    /// with metadata, and the vault; mints `initial_supply` into the vault.
    pub fn initialize_faucet(
        ctx: Context<InitializeFaucet>,
        faucet_seed: String,
        name: String,
        symbol: String,
        uri: String,
        initial_supply: u64,
    ) -> Result<()> {
        instructions::initialize_faucet::handler(ctx, faucet_seed, name, symbol, uri, initial_supply)
    }

    /// Request up to `rate_limit` tokens, once per cooldown period per wallet.
    pub fn request_tokens(
        ctx: Context<RequestTokens>,
        faucet_seed: String,
        amount: u64,
    ) -> Result<()> {
        instructions::request_tokens::handler(ctx, faucet_seed, amount)
    }

    /// Burn tokens from the caller's own account.
    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::handler(ctx, amount)
    }

    /// Close vault, mint, and faucet PDA; the vault must already be empty.
    pub fn delete_faucet(ctx: Context<DeleteFaucet>, faucet_seed: String) -> Result<()> {
        instructions::delete_faucet::delete_faucet(ctx, faucet_seed)
    }

    /// Burn any remaining vault balance, then tear the faucet down.
    pub fn burn_and_delete_faucet(
        ctx: Context<BurnAndDeleteFaucet>,
        faucet_seed: String,
    ) -> Result<()> {
        instructions::delete_faucet::burn_and_delete_faucet(ctx, faucet_seed)
    }

    // ── Task escrow ───────────────────────────────────────────────────────────

    /// Create a task and escrow its full reward up front.
    pub fn create_task(
        ctx: Context<CreateTask>,
        task_id: String,
        description: String,
        reward_amount: u64,
    ) -> Result<()> {
        instructions::create_task::handler(ctx, task_id, description, reward_amount)
    }

    /// Attach a single assignee (creator only).
    pub fn assign_task(
        ctx: Context<AssignTask>,
        task_id: String,
        assignee: Pubkey,
    ) -> Result<()> {
        instructions::assign_task::assign_task(ctx, task_id, assignee)
    }

    /// Attach up to 10 assignees; the reward splits evenly among them.
    pub fn assign_task_multiple(
        ctx: Context<AssignTask>,
        task_id: String,
        assignees: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::assign_task::assign_task_multiple(ctx, task_id, assignees)
    }

    /// Creator-driven status move (Created → InProgress → Completed).
    pub fn update_task_status(
        ctx: Context<UpdateTaskStatus>,
        task_id: String,
        new_status: TaskStatus,
    ) -> Result<()> {
        instructions::update_task_status::handler(ctx, task_id, new_status)
    }

    /// Raise the reward immediately, or start a time-locked decrease.
    pub fn update_task_reward(
        ctx: Context<UpdateTaskReward>,
        task_id: String,
        new_reward_amount: u64,
    ) -> Result<()> {
        instructions::update_task_reward::update_task_reward(ctx, task_id, new_reward_amount)
    }

    /// Settle a pending reward decrease after its time lock elapses.
    pub fn execute_pending_decrease(
        ctx: Context<ExecutePendingDecrease>,
        task_id: String,
    ) -> Result<()> {
        instructions::update_task_reward::execute_pending_decrease(ctx, task_id)
    }

    /// Discard a pending reward decrease.
    pub fn cancel_pending_decrease(
        ctx: Context<CancelPendingDecrease>,
        task_id: String,
    ) -> Result<()> {
        instructions::update_task_reward::cancel_pending_decrease(ctx, task_id)
    }

    /// Assignee marks the task completed and claims their share in one step.
    pub fn complete_task(ctx: Context<ClaimReward>, task_id: String) -> Result<()> {
        instructions::claim_reward::complete_task(ctx, task_id)
    }

    /// Claim a share of a completed task's escrow; the final claim drains and
    /// closes the escrow account.
    pub fn claim_reward(ctx: Context<ClaimReward>, task_id: String) -> Result<()> {
        instructions::claim_reward::claim_reward(ctx, task_id)
    }

    /// Refund remaining escrow to the creator and mark the task cancelled.
    pub fn cancel_task(ctx: Context<CancelTask>, task_id: String) -> Result<()> {
        instructions::cancel_task::handler(ctx, task_id)
    }

    /// Reclaim the task account's rent once the escrow is settled.
    pub fn close_task(ctx: Context<CloseTask>, task_id: String) -> Result<()> {
        instructions::close_task::handler(ctx, task_id)
    }
}
