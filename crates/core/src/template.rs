//! Positional URL template substitution
//!
//! Every URL family in this crate is a fixed string with `{0}`, `{1}`, ...
//! slots. Eras only change which template and which slot values are used;
//! the substitution itself is the same everywhere.

/// Replace each `{i}` slot in `template` with `args[i]`.
///
/// All occurrences of a slot are replaced (the legacy audio templates repeat
/// the compact date). Slots without a matching argument are left untouched.
pub fn fill(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |content, (i, arg)| {
            content.replace(&format!("{{{i}}}"), arg)
        })
}
