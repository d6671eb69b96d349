//! Avatar initials derived from a display name.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

const MAX_INITIALS: usize = 2;

/// First letter of each space-separated token, upper-cased, at most two.
///
/// Runs of spaces produce empty tokens; those contribute nothing rather than
/// being indexed into.
pub fn initials(name: &str) -> String {
    let joined: String = name.split(' ').filter_map(|token| token.chars().next()).collect();
    joined.to_uppercase().chars().take(MAX_INITIALS).collect()
}
