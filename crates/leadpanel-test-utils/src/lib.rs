// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Leadpanel integration tests: lead fixtures, a
//! scripted mock store, and a harness over the real SQLite stack.

pub mod fixtures;
pub mod harness;
pub mod mock_store;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_store::MockLeadStore;
