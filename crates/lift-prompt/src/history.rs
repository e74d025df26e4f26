use lift_core::Turn;

/// History block used when a session has no prior turns.
pub const NO_HISTORY_SENTINEL: &str = "(no prior conversation)";

/// Serialize turns oldest first, each as `ROLE:\ncontent\n`.
pub fn serialize_history(turns: &[Turn]) -> String {
    if turns.is_empty() {
        return NO_HISTORY_SENTINEL.to_string();
    }
    let mut block = String::new();
    for turn in turns {
        block.push_str(turn.role.label());
        block.push_str(":\n");
        block.push_str(&turn.content);
        block.push('\n');
    }
    block
}
