// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock lead store for deterministic testing.
//!
//! `MockLeadStore` implements `LeadStore` over an in-memory dataset, with
//! FIFO queues of scripted outcomes for both operations. When a queue is
//! empty the store behaves like a healthy backend: `fetch_all` serves the
//! current dataset and `update_status` applies the write and confirms it.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use leadpanel_core::{Lead, LeadStore, LeadpanelError};

/// Scripted outcome for the next `fetch_all` call.
enum ScriptedFetch {
    /// Return this exact list (an empty list exercises the
    /// staleness-over-blankness path).
    Leads(Vec<Lead>),
    /// Fail with a storage error.
    Fail,
}

/// Scripted outcome for the next `update_status` call.
enum ScriptedUpdate {
    /// Return `Ok(false)` without touching the dataset.
    Deny,
    /// Fail with a storage error.
    Fail,
}

/// A lead store with scripted outcomes and call recording.
pub struct MockLeadStore {
    leads: Mutex<Vec<Lead>>,
    fetch_script: Mutex<VecDeque<ScriptedFetch>>,
    update_script: Mutex<VecDeque<ScriptedUpdate>>,
    update_calls: Mutex<Vec<(i64, bool)>>,
}

impl MockLeadStore {
    /// Creates a mock store with an empty dataset.
    pub fn new() -> Self {
        Self::with_leads(Vec::new())
    }

    /// Creates a mock store pre-loaded with the given leads.
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        Self {
            leads: Mutex::new(leads),
            fetch_script: Mutex::new(VecDeque::new()),
            update_script: Mutex::new(VecDeque::new()),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts the next `fetch_all` to return exactly `leads`.
    pub async fn queue_fetch(&self, leads: Vec<Lead>) {
        self.fetch_script
            .lock()
            .await
            .push_back(ScriptedFetch::Leads(leads));
    }

    /// Scripts the next `fetch_all` to fail.
    pub async fn queue_fetch_failure(&self) {
        self.fetch_script.lock().await.push_back(ScriptedFetch::Fail);
    }

    /// Scripts the next `update_status` to be declined (`Ok(false)`).
    pub async fn queue_update_denied(&self) {
        self.update_script
            .lock()
            .await
            .push_back(ScriptedUpdate::Deny);
    }

    /// Scripts the next `update_status` to fail.
    pub async fn queue_update_failure(&self) {
        self.update_script
            .lock()
            .await
            .push_back(ScriptedUpdate::Fail);
    }

    /// Every `(id, paused)` pair `update_status` was called with, in order.
    pub async fn update_calls(&self) -> Vec<(i64, bool)> {
        self.update_calls.lock().await.clone()
    }

    /// The current in-memory dataset.
    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.lock().await.clone()
    }

    fn storage_error(what: &str) -> LeadpanelError {
        LeadpanelError::Storage {
            source: Box::new(std::io::Error::other(what.to_string())),
        }
    }
}

impl Default for MockLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadStore for MockLeadStore {
    async fn fetch_all(&self) -> Result<Vec<Lead>, LeadpanelError> {
        match self.fetch_script.lock().await.pop_front() {
            Some(ScriptedFetch::Leads(leads)) => Ok(leads),
            Some(ScriptedFetch::Fail) => Err(Self::storage_error("scripted fetch failure")),
            None => Ok(self.leads.lock().await.clone()),
        }
    }

    async fn update_status(&self, id: i64, paused: bool) -> Result<bool, LeadpanelError> {
        self.update_calls.lock().await.push((id, paused));

        match self.update_script.lock().await.pop_front() {
            Some(ScriptedUpdate::Deny) => Ok(false),
            Some(ScriptedUpdate::Fail) => Err(Self::storage_error("scripted update failure")),
            None => {
                let mut leads = self.leads.lock().await;
                match leads.iter_mut().find(|lead| lead.id == id) {
                    Some(lead) => {
                        lead.automation_paused = paused;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
        }
    }
}
