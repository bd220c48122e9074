/// SPL token decimals — 6 (like USDC).
pub const DECIMALS: u8 = 6;

/// Maximum tokens dispensed per faucet request — 1,000 ALMS at 6 decimal places.
pub const RATE_LIMIT: u64 = 1_000_000_000;

/// Cooldown between faucet requests from the same wallet — 24 hours in seconds.
pub const COOLDOWN_SECS: i64 = 86_400;

/// Time lock before a pending reward decrease can be executed — 6 hours in seconds.
pub const DECREASE_TIME_LOCK_SECS: i64 = 6 * 60 * 60;

/// Longest accepted task identifier, in characters.
pub const MAX_TASK_ID_LEN: usize = 50;

/// Longest accepted task description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum assignees a single task's reward can be split across.
pub const MAX_ASSIGNEES: usize = 10;

/// Token metadata field caps (Token-2022 metadata extension).
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

/// Longest accepted faucet seed string.
pub const MAX_FAUCET_SEED_LEN: usize = 32;

/// PDA seed prefix for task accounts — [b"task", task_id, creator].
pub const TASK_SEED: &[u8] = b"task";

/// PDA seed prefix for per-wallet faucet request records.
pub const USER_RECORD_SEED: &[u8] = b"user_record";
