//! Mock merge request source for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use mr_changelog::error::{Error, Result};
use mr_changelog::platform::MergeRequestSource;
use mr_changelog::types::MergeRequest;
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `list_merge_requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub iids: Vec<u64>,
    pub per_page: usize,
}

/// Simple mock merge request source
///
/// Features:
/// - Canned records per iid (unknown iids are omitted, like the real API)
/// - Call tracking for verification
/// - Error injection on the Nth call
pub struct MockMergeRequestSource {
    records: Mutex<HashMap<u64, Vec<MergeRequest>>>,
    calls: Mutex<Vec<ListCall>>,
    fail_on_call: Mutex<Option<(usize, String)>>,
}

impl MockMergeRequestSource {
    /// Create an empty mock
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_on_call: Mutex::new(None),
        }
    }

    /// Create a mock that knows `iid -> title` pairs
    pub fn with_titles(pairs: &[(u64, &str)]) -> Self {
        let mock = Self::new();
        for (iid, title) in pairs {
            mock.add_record(*iid, title);
        }
        mock
    }

    /// Create a mock that titles every iid in `iids` as `MR <iid>`
    pub fn with_generated_titles(iids: impl IntoIterator<Item = u64>) -> Self {
        let mock = Self::new();
        for iid in iids {
            mock.add_record(iid, &format!("MR {iid}"));
        }
        mock
    }

    /// Add a record; adding the same iid twice returns both records
    pub fn add_record(&self, iid: u64, title: &str) {
        self.records
            .lock()
            .unwrap()
            .entry(iid)
            .or_default()
            .push(MergeRequest {
                iid,
                title: title.to_string(),
            });
    }

    /// Make the `n`th call (1-based) return an error
    pub fn fail_on_call(&self, n: usize, msg: &str) {
        *self.fail_on_call.lock().unwrap() = Some((n, msg.to_string()));
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<ListCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get count of requests issued
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Assert the exact iid batches requested, in order
    pub fn assert_batches(&self, expected: &[Vec<u64>]) {
        let batches: Vec<Vec<u64>> = self.get_calls().into_iter().map(|c| c.iids).collect();
        assert_eq!(batches, expected, "unexpected request batches");
    }
}

#[async_trait]
impl MergeRequestSource for MockMergeRequestSource {
    async fn list_merge_requests(
        &self,
        iids: &[u64],
        per_page: usize,
    ) -> Result<Vec<MergeRequest>> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(ListCall {
                iids: iids.to_vec(),
                per_page,
            });
            calls.len()
        };

        // Check for injected error
        if let Some((n, msg)) = self.fail_on_call.lock().unwrap().as_ref() {
            if *n == call_number {
                return Err(Error::GitLabApi(msg.clone()));
            }
        }

        let records = self.records.lock().unwrap();
        Ok(iids
            .iter()
            .filter_map(|iid| records.get(iid))
            .flatten()
            .cloned()
            .collect())
    }
}
