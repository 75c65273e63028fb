use serde::{Deserialize, Serialize};

use crate::batch::{Batch, BatchId};
use crate::error::RepositoryError;
use crate::repository::Repository;

pub const SHARE_TEXT: &str =
    "Check out the journey of this koji product from food waste to fermented gold!";

/// Shown after the share fallback copies the link.
pub const CLIPBOARD_NOTICE: &str = "Link copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchTab {
    #[default]
    Journey,
    Details,
}

impl BatchTab {
    pub const ALL: [BatchTab; 2] = [BatchTab::Journey, BatchTab::Details];

    pub fn label(self) -> &'static str {
        match self {
            BatchTab::Journey => "Journey Timeline",
            BatchTab::Details => "Batch Details",
        }
    }
}

/// Lifecycle of the batch detail page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BatchPage {
    #[default]
    Loading,
    Loaded { batch: Box<Batch>, tab: BatchTab },
    NotFound,
}

impl BatchPage {
    /// Settle the page from a lookup. A failed lookup renders the same way
    /// as a missing record.
    pub fn resolve(result: Result<Option<Batch>, RepositoryError>) -> Self {
        match result {
            Ok(Some(batch)) => BatchPage::Loaded {
                batch: Box::new(batch),
                tab: BatchTab::default(),
            },
            Ok(None) | Err(_) => BatchPage::NotFound,
        }
    }

    pub fn fetch<R: Repository<Batch> + ?Sized>(repo: &R, id: &BatchId) -> Self {
        Self::resolve(repo.get_by_id(id.as_str()))
    }

    /// Switch tabs without refetching. Does nothing unless loaded.
    pub fn select_tab(&mut self, next: BatchTab) {
        if let BatchPage::Loaded { tab, .. } = self {
            *tab = next;
        }
    }

    pub fn batch(&self) -> Option<&Batch> {
        match self {
            BatchPage::Loaded { batch, .. } => Some(batch),
            _ => None,
        }
    }

    pub fn tab(&self) -> Option<BatchTab> {
        match self {
            BatchPage::Loaded { tab, .. } => Some(*tab),
            _ => None,
        }
    }
}

/// Argument for the Web Share API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_batch(batch: &Batch, url: impl Into<String>) -> Self {
        Self {
            title: format!("Koji Copenhagen - Batch {}", batch.batch_id),
            text: SHARE_TEXT.to_string(),
            url: url.into(),
        }
    }
}

/// Public link for a batch, e.g. `https://koji.cph/batch/KC2025-001`.
pub fn batch_url(public_base: &str, id: &BatchId) -> String {
    format!("{}/batch/{}", public_base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalog;

    fn sample() -> Batch {
        let catalog = MockCatalog::load().unwrap();
        catalog.batches().get_by_id("KC2025-001").unwrap().unwrap()
    }

    #[test]
    fn test_default_is_loading() {
        assert_eq!(BatchPage::default(), BatchPage::Loading);
        assert_eq!(BatchPage::Loading.tab(), None);
    }

    #[test]
    fn test_resolve_found_opens_journey_tab() {
        let page = BatchPage::resolve(Ok(Some(sample())));
        assert_eq!(page.tab(), Some(BatchTab::Journey));
        assert_eq!(page.batch().map(|b| b.batch_id.as_str()), Some("KC2025-001"));
    }

    #[test]
    fn test_resolve_missing_or_failed() {
        assert_eq!(BatchPage::resolve(Ok(None)), BatchPage::NotFound);
        let failed = BatchPage::resolve(Err(RepositoryError::Unavailable("offline".into())));
        assert_eq!(failed, BatchPage::NotFound);
    }

    #[test]
    fn test_select_tab() {
        let mut page = BatchPage::resolve(Ok(Some(sample())));
        page.select_tab(BatchTab::Details);
        assert_eq!(page.tab(), Some(BatchTab::Details));
        page.select_tab(BatchTab::Journey);
        assert_eq!(page.tab(), Some(BatchTab::Journey));

        assert_eq!(BatchTab::ALL.map(BatchTab::label), ["Journey Timeline", "Batch Details"]);

        let mut missing = BatchPage::NotFound;
        missing.select_tab(BatchTab::Details);
        assert_eq!(missing, BatchPage::NotFound);
    }

    #[test]
    fn test_share_payload() {
        let batch = sample();
        let url = batch_url("https://koji.cph/", &batch.batch_id);
        assert_eq!(url, "https://koji.cph/batch/KC2025-001");

        let payload = SharePayload::for_batch(&batch, url.clone());
        assert_eq!(payload.title, "Koji Copenhagen - Batch KC2025-001");
        assert_eq!(payload.text, SHARE_TEXT);
        assert_eq!(payload.url, url);
    }
}
