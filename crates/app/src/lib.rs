pub mod app_loop;
pub mod save_file;
pub mod seed;

pub const APP_NAME: &str = "Delve";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `RunOutcome` to its reason code string.
pub fn reason_code(outcome: delve_core::RunOutcome) -> &'static str {
    match outcome {
        delve_core::RunOutcome::Victory => "WIN_SCORE",
        delve_core::RunOutcome::Defeat => "DMG_HP_ZERO",
    }
}
