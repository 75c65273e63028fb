//! Mock data store built from the JSON fixtures embedded at compile time.

use serde::de::DeserializeOwned;

use crate::article::Article;
use crate::batch::Batch;
use crate::error::RepositoryError;
use crate::partner::Partner;
use crate::repository::{InMemoryRepository, Record};

const PARTNERS_JSON: &str = include_str!("../data/partners.json");
const BATCHES_JSON: &str = include_str!("../data/batches.json");
const ARTICLES_JSON: &str = include_str!("../data/articles.json");

fn parse_fixture<T: DeserializeOwned + Record + Clone>(
    name: &'static str,
    json: &str,
) -> Result<InMemoryRepository<T>, RepositoryError> {
    let records: Vec<T> =
        serde_json::from_str(json).map_err(|source| RepositoryError::Fixture { name, source })?;
    InMemoryRepository::new(records)
}

/// Every record the front-end knows about.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    partners: InMemoryRepository<Partner>,
    batches: InMemoryRepository<Batch>,
    articles: InMemoryRepository<Article>,
}

impl MockCatalog {
    pub fn load() -> Result<Self, RepositoryError> {
        Ok(Self {
            partners: parse_fixture("partners", PARTNERS_JSON)?,
            batches: parse_fixture("batches", BATCHES_JSON)?,
            articles: parse_fixture("articles", ARTICLES_JSON)?,
        })
    }

    pub fn partners(&self) -> &InMemoryRepository<Partner> {
        &self.partners
    }

    pub fn batches(&self) -> &InMemoryRepository<Batch> {
        &self.batches
    }

    pub fn articles(&self) -> &InMemoryRepository<Article> {
        &self.articles
    }

    /// Articles flagged for the learning hub's featured strip.
    pub fn featured_articles(&self) -> Vec<&Article> {
        self.articles.records().iter().filter(|a| a.featured).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{BatchId, BatchStatus};
    use crate::repository::Repository;

    #[test]
    fn test_fixtures_load() {
        let catalog = MockCatalog::load().unwrap();
        assert_eq!(catalog.partners().len(), 4);
        assert_eq!(catalog.batches().len(), 3);
        assert_eq!(catalog.articles().len(), 6);
    }

    #[test]
    fn test_every_batch_passes_data_checks() {
        let catalog = MockCatalog::load().unwrap();
        for batch in catalog.batches().records() {
            assert_eq!(batch.validate(), Ok(()), "batch {}", batch.batch_id);
        }
    }

    #[test]
    fn test_sample_batch() {
        let catalog = MockCatalog::load().unwrap();
        let batch = catalog.batches().get_by_id("KC2025-001").unwrap().unwrap();
        assert_eq!(batch.batch_id, BatchId::new("KC2025-001"));
        assert_eq!(batch.status, BatchStatus::Aging);
        assert_eq!(batch.current_step_index(), Some(3));

        let aging = batch.aging.unwrap();
        assert_eq!((aging.current_age, aging.target_age), (3, 180));
        assert_eq!(batch.media.gallery().len(), 4);
    }

    #[test]
    fn test_batch_sources_name_known_partners() {
        let catalog = MockCatalog::load().unwrap();
        for batch in catalog.batches().records() {
            let partner = catalog
                .partners()
                .get_by_id(&batch.source.partner_id.0)
                .unwrap();
            assert!(partner.is_some(), "unknown partner for {}", batch.batch_id);
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = MockCatalog::load().unwrap();
        assert!(catalog.batches().get_by_id("KC1999-000").unwrap().is_none());
    }

    #[test]
    fn test_featured_articles() {
        let catalog = MockCatalog::load().unwrap();
        let ids: Vec<_> = catalog
            .featured_articles()
            .iter()
            .map(|a| a.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["what-is-koji", "environmental-impact"]);
    }

    #[test]
    fn test_bad_fixture_reports_name() {
        let err = parse_fixture::<Partner>("partners", "[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, RepositoryError::Fixture { name: "partners", .. }));
    }
}
