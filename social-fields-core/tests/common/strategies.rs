//! Proptest Strategies

use proptest::prelude::*;

/// Handles that satisfy the grammar.
pub fn valid_handle_strategy() -> impl Strategy<Value = String> {
    "@?[A-Za-z0-9_]{1,15}"
}

/// Non-blank strings that break the grammar: too long, or containing a
/// character outside `[A-Za-z0-9_]` after the optional `@`.
pub fn invalid_handle_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9_]{16,30}",
        "[A-Za-z0-9_]{0,7}[-. !#/?é][A-Za-z0-9_]{0,7}",
        "@@[A-Za-z0-9_]{1,10}",
    ]
    .prop_filter("non-blank", |s| !s.trim().is_empty())
}

/// Whitespace-only strings, including the empty string.
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,10}"
}

/// Facebook account slugs.
pub fn account_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9.\\-]{0,30}"
}
