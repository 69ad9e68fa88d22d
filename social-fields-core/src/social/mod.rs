// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Profile Validation
//!
//! This module provides:
//! - A registry of named profile checkers ("twitter", "facebook", ...)
//! - The built-in Twitter and Facebook checkers
//!
//! Checkers are fail-open: they only reject a value on malformed input or
//! on a confirmed nonexistence signal from the remote service.

mod facebook;
mod registry;
mod twitter;

pub use facebook::{extract_account, FacebookChecker, MISSING_ALIAS_CODE};
pub use registry::{is_blank, CheckerRegistry, ProfileChecker, GENERIC_INVALID_MESSAGE};
pub use twitter::{is_valid_handle, TwitterChecker};
