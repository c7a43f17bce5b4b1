use contact_book::models::Record;
use contact_book::repositories::RecordRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record repository for testing.
///
/// Stores records in a plain vector and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Vec<Record>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a new empty MockRecordRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository without counting a call.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name.as_str() == name)
    }
}

impl RecordRepository for MockRecordRepository {
    fn add_record(&mut self, record: Record) -> Option<Record> {
        self.track_call("add_record");

        match self.position(record.name.as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    fn get(&self, name: &str) -> Option<&Record> {
        self.track_call("get");
        self.position(name).map(|index| &self.records[index])
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("get_mut");
        match self.position(name) {
            Some(index) => self.records.get_mut(index),
            None => None,
        }
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        self.track_call("records");
        Box::new(self.records.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
