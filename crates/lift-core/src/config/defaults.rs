// Single source of truth for all default values.

// --- Privacy ---
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.40;
pub const DEFAULT_CONTEXT_SCORING: bool = true;

// --- Session ---
pub const DEFAULT_MAX_TURNS: usize = 6; // three user/assistant exchanges
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 3600; // 1 hour
pub const DEFAULT_MAX_PERSISTED_BYTES: usize = 80_000; // six worst-case turns of DEFAULT_MAX_TURN_CHARS
pub const DEFAULT_MAX_TURN_CHARS: usize = 2_000;

// --- Input ---
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10 MB

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
