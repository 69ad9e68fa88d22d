// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Form validation
//!
//! Shapes exchanged with the host form engine (form, fields, submission,
//! validation result) and the validator that runs profile checks over a
//! submission.

mod types;
mod validator;

pub use types::{Form, FormField, Submission, ValidationResult};
pub use validator::{ConditionalLogic, FormValidator, NoConditionalLogic};
