// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration Tests for Social Fields Core
//!
//! These tests drive complete workflows the way a host form engine would:
//! form JSON in, annotated validation result out; entry render with and
//! without a warm cache.
//!
//! Run with: cargo test --test integration

#[path = "../common/mod.rs"]
mod common;

mod render_workflow_test;
mod submission_workflow_test;
