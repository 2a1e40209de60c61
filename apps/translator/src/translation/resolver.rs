//! Field resolution: free text written by the user beats the dropdown pick.

use crate::translation::options::SENTINEL;

/// True when `value` carries a real choice: not blank and not the sentinel.
///
/// The sentinel comparison is exact, so `" -- "` counts as set; it resolves to
/// `"--"` after trimming and is then dropped by the prompt builder.
pub fn is_set(value: &str) -> bool {
    !value.trim().is_empty() && value != SENTINEL
}

/// Effective value of one optional (dropdown, free text) pair.
///
/// Set free text wins and is returned trimmed; otherwise the dropdown value is
/// returned unchanged, which may itself be the sentinel.
pub fn resolve<'a>(dropdown: &'a str, free_text: &'a str) -> &'a str {
    if is_set(free_text) {
        free_text.trim()
    } else {
        dropdown
    }
}
