//! Key-value persistence wrapper.
//!
//! Mirrors the browser storage surface the client persists into:
//! JSON-serializable values behind string keys, with typed accessors
//! for the report lists, detail records, and the token balance.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tipline_core::constants::storage_keys;
use tipline_core::{Report, ReportDetail, ReportStatus};
use tracing::warn;

/// Raw JSON key-value storage.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<Value>;
    fn set_raw(&mut self, key: &str, value: Value);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// Typed accessors over any raw store.
pub trait KeyValueStoreExt: KeyValueStore {
    /// The stored value, or `default` when absent or undecodable.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get_raw(key) {
            Some(raw) => serde_json::from_value(raw).unwrap_or_else(|err| {
                warn!(key, error = %err, "stored value undecodable, using default");
                default
            }),
            None => default,
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(raw) => self.set_raw(key, raw),
            Err(err) => warn!(key, error = %err, "value not serializable, skipping write"),
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Report-shaped view over a key-value store.
pub struct ReportStorage<S> {
    store: S,
}

impl<S: KeyValueStore> ReportStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reports(&self) -> Vec<Report> {
        self.store.get_or(storage_keys::REPORTS, Vec::new())
    }

    pub fn set_reports(&mut self, reports: &[Report]) {
        self.store.set(storage_keys::REPORTS, &reports);
    }

    pub fn report_details(&self) -> Vec<ReportDetail> {
        self.store.get_or(storage_keys::REPORT_DETAILS, Vec::new())
    }

    pub fn set_report_details(&mut self, details: &[ReportDetail]) {
        self.store.set(storage_keys::REPORT_DETAILS, &details);
    }

    pub fn token_balance(&self) -> f64 {
        self.store.get_or(storage_keys::TOKEN_BALANCE, 0.0)
    }

    pub fn set_token_balance(&mut self, balance: f64) {
        self.store.set(storage_keys::TOKEN_BALANCE, &balance);
    }

    /// Update a report's status in both cached lists, stamping review
    /// notes and date on the detail record. Unknown ids are a no-op.
    pub fn update_report_status(&mut self, report_id: &str, status: ReportStatus, notes: &str) {
        let mut reports = self.reports();
        if let Some(report) = reports.iter_mut().find(|r| r.id == report_id) {
            report.status = status;
            self.set_reports(&reports);
        }

        let mut details = self.report_details();
        if let Some(detail) = details.iter_mut().find(|d| d.report.id == report_id) {
            detail.report.status = status;
            detail.review_notes = Some(notes.to_string());
            detail.review_date = Some(Utc::now());
            self.set_report_details(&details);
        }
    }
}
