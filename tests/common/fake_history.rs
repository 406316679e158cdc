//! Fake history provider returning canned data

#![allow(dead_code)]

use mr_changelog::error::{Error, Result};
use mr_changelog::history::HistoryProvider;
use regex::Regex;
use std::sync::Mutex;

/// History provider backed by a fixed tag list and iid list
pub struct FakeHistory {
    /// Tags, newest first
    tags: Vec<String>,
    /// Referenced iids, newest first
    ids: Vec<u64>,
    fail_log: Option<String>,
    scanned_from: Mutex<Vec<Option<String>>>,
}

impl FakeHistory {
    /// History with no tags referencing `ids` (newest first)
    pub fn with_ids(ids: &[u64]) -> Self {
        Self {
            tags: Vec::new(),
            ids: ids.to_vec(),
            fail_log: None,
            scanned_from: Mutex::new(Vec::new()),
        }
    }

    /// Add tags, newest first
    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    /// Make `list_referenced_ids` fail
    pub fn failing_log(mut self, msg: &str) -> Self {
        self.fail_log = Some(msg.to_string());
        self
    }

    /// Starting points `list_referenced_ids` was called with
    pub fn scanned_from(&self) -> Vec<Option<String>> {
        self.scanned_from.lock().unwrap().clone()
    }
}

impl HistoryProvider for FakeHistory {
    fn resolve_latest_tag(&self, matcher: &Regex) -> Result<Option<String>> {
        Ok(self.tags.iter().find(|t| matcher.is_match(t)).cloned())
    }

    fn list_referenced_ids(&self, start: Option<&str>) -> Result<Vec<u64>> {
        self.scanned_from
            .lock()
            .unwrap()
            .push(start.map(ToString::to_string));

        if let Some(ref msg) = self.fail_log {
            return Err(Error::Git(msg.clone()));
        }
        Ok(self.ids.clone())
    }
}
