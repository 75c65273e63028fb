pub mod article;
pub mod batch;
pub mod batch_page;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod journey;
pub mod location;
pub mod partner;
pub mod product;
pub mod progress;
pub mod repository;
pub mod scan;
pub mod user;

pub use batch::{Batch, BatchId};
pub use catalog::MockCatalog;
pub use error::{RecordError, RepositoryError};
pub use partner::{Partner, PartnerId};
pub use repository::{InMemoryRepository, Record, Repository};
