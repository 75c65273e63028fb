use std::collections::HashMap;

use crate::article::Article;
use crate::batch::Batch;
use crate::error::RepositoryError;
use crate::partner::Partner;

/// A record addressable by a string identifier.
pub trait Record {
    fn record_id(&self) -> &str;
}

impl Record for Partner {
    fn record_id(&self) -> &str {
        &self.id.0
    }
}

impl Record for Batch {
    fn record_id(&self) -> &str {
        &self.batch_id.0
    }
}

impl Record for Article {
    fn record_id(&self) -> &str {
        &self.id.0
    }
}

/// Read access to a store of records.
///
/// Pages only see this trait. The embedded fixtures are one implementation;
/// a networked store can replace them without touching presentation code.
pub trait Repository<T: Record> {
    /// `Ok(None)` when no record has this id.
    fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// All records in their stored order.
    fn list(&self) -> Result<Vec<T>, RepositoryError>;
}

/// Immutable, id-indexed store that keeps insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record + Clone> InMemoryRepository<T> {
    /// Fails on the first duplicate id.
    pub fn new(records: Vec<T>) -> Result<Self, RepositoryError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let id = record.record_id().to_string();
            if index.insert(id.clone(), pos).is_some() {
                return Err(RepositoryError::DuplicateId(id));
            }
        }
        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing variant of [`Repository::list`].
    pub fn records(&self) -> &[T] {
        &self.records
    }
}

impl<T: Record + Clone> Repository<T> for InMemoryRepository<T> {
    fn get_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self.index.get(id).map(|&pos| self.records[pos].clone()))
    }

    fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.clone())
    }
}
