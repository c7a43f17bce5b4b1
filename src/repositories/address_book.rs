use crate::models::Record;
use crate::repositories::traits::RecordRepository;
use std::collections::HashMap;
use tracing::debug;

/// In-memory record repository backing one console session.
///
/// Records keep the position of their first insertion; overwriting a name
/// replaces the record in place.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for AddressBook {
    fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name.as_str().to_string();
        match self.index.get(&key).copied() {
            Some(slot) => {
                debug!("Overwriting record '{}'", key);
                Some(std::mem::replace(&mut self.records[slot], record))
            }
            None => {
                debug!("Adding record '{}'", key);
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.records.iter())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, PhoneNumber};
    use crate::error::CommandError;

    fn record(name: &str, phone: &str) -> Record {
        Record::new(Name::new(name).unwrap()).with_phone(PhoneNumber::new(phone).unwrap())
    }

    fn names<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a str> {
        records.map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        assert!(book.add_record(record("dima", "0975323736")).is_none());
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("dima").unwrap().phones_display(), "0975323736");
        assert!(book.get("bob").is_none());
    }

    #[test]
    fn test_add_same_name_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));
        book.add_record(record("bob", "0501234567"));

        let replaced = book.add_record(record("dima", "+380661112233"));
        assert_eq!(replaced, Some(record("dima", "0975323736")));
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("dima"), Some(&record("dima", "+380661112233")));
        // position of the first insertion is kept
        assert_eq!(names(book.records()), vec!["dima", "bob"]);
    }

    #[test]
    fn test_find_unknown_name() {
        let mut book = AddressBook::new();
        match book.find("ghost") {
            Err(CommandError::ContactNotFound(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected ContactNotFound, got: {:?}", other),
        }
        assert!(book.find_mut("ghost").is_err());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));

        book.find_mut("dima")
            .unwrap()
            .phones
            .push(PhoneNumber::new("0501234567").unwrap());
        assert_eq!(book.get("dima").unwrap().phones.len(), 2);
    }

    #[test]
    fn test_iter_bounded_fewer_records_than_requested() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));
        book.add_record(record("bob", "0501234567"));

        let mut iter = book.iter_bounded(5);
        assert_eq!(iter.next().map(|r| r.name.as_str()), Some("dima"));
        assert_eq!(iter.next().map(|r| r.name.as_str()), Some("bob"));
        assert!(iter.next().is_none());
        assert!(iter.is_exhausted());
    }

    #[test]
    fn test_iter_bounded_stops_at_limit() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));
        book.add_record(record("bob", "0501234567"));

        let mut iter = book.iter_bounded(1);
        assert_eq!(names(iter.by_ref()), vec!["dima"]);
        assert!(!iter.is_exhausted());

        // a fresh request starts over
        assert_eq!(names(book.iter_bounded(2)), vec!["dima", "bob"]);
    }

    #[test]
    fn test_iter_bounded_exact_count_is_exhausted() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));

        let mut iter = book.iter_bounded(1);
        assert_eq!(iter.by_ref().count(), 1);
        assert!(iter.is_exhausted());
    }

    #[test]
    fn test_iter_bounded_zero() {
        let mut book = AddressBook::new();
        book.add_record(record("dima", "0975323736"));

        let mut iter = book.iter_bounded(0);
        assert!(iter.next().is_none());
        assert!(!iter.is_exhausted());
    }
}
