use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use std::iter::Peekable;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage so the command dispatcher can
/// run against the in-memory address book or a test double.
pub trait RecordRepository {
    /// Insert a record under its name, replacing any record already stored
    /// there. Returns the replaced record.
    fn add_record(&mut self, record: Record) -> Option<Record>;

    /// Look up a record by name.
    fn get(&self, name: &str) -> Option<&Record>;

    /// Look up a record by name for modification.
    fn get_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// All records in insertion order.
    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the repository holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a record, failing with `CommandError::ContactNotFound`.
    fn find(&self, name: &str) -> CommandResult<&Record> {
        self.get(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    /// Mutable variant of [`RecordRepository::find`].
    fn find_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    /// Iterate over at most `max_count` records in insertion order.
    ///
    /// Every call starts from the first record again.
    fn iter_bounded(&self, max_count: usize) -> BoundedIter<'_> {
        BoundedIter::new(self.records(), max_count)
    }
}

/// Lazy iterator over the first `max_count` records of a repository.
///
/// Once it stops yielding, [`BoundedIter::is_exhausted`] tells whether the
/// repository ran out of records (as opposed to the limit being reached with
/// records left over).
pub struct BoundedIter<'a> {
    inner: Peekable<Box<dyn Iterator<Item = &'a Record> + 'a>>,
    remaining: usize,
    exhausted: bool,
}

impl<'a> BoundedIter<'a> {
    pub fn new(records: Box<dyn Iterator<Item = &'a Record> + 'a>, max_count: usize) -> Self {
        Self {
            inner: records.peekable(),
            remaining: max_count,
            exhausted: false,
        }
    }

    /// Whether every stored record has been yielded.
    ///
    /// Only meaningful after the iterator has returned `None`.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<'a> Iterator for BoundedIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.remaining == 0 {
            self.exhausted = self.inner.peek().is_none();
            return None;
        }

        match self.inner.next() {
            Some(record) => {
                self.remaining -= 1;
                Some(record)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
