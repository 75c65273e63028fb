use koji_common::batch_page::{BatchPage, BatchTab};
use koji_common::format::{format_co2, format_weight};
use koji_common::journey::{step_visual, StepIcon};
use koji_common::scan::{ScanOutcome, ScanSession, ScannerEvent, DEMO_PAYLOAD};
use koji_common::{Batch, BatchId, InMemoryRepository, MockCatalog, Repository, RepositoryError};

fn navigate(session: &mut ScanSession, payload: &str) -> BatchId {
    match session.handle(ScannerEvent::Decoded {
        text: payload.to_string(),
    }) {
        ScanOutcome::Navigate(id) => id,
        other => panic!("expected navigation, got {other:?}"),
    }
}

fn live_session() -> ScanSession {
    let mut session = ScanSession::new();
    session.start();
    session.handle(ScannerEvent::PermissionGranted);
    session
}

/// Scanning the demo code lands on the sample batch with the journey tab open.
#[test]
fn demo_code_opens_sample_batch() {
    let catalog = MockCatalog::load().unwrap();
    let mut session = live_session();
    let id = navigate(&mut session, DEMO_PAYLOAD);

    let mut page = BatchPage::fetch(catalog.batches(), &id);
    assert_eq!(page.tab(), Some(BatchTab::Journey));

    let batch = page.batch().unwrap().clone();
    assert_eq!(batch.product_name, "Barley Miso - 6 Month");
    assert_eq!(format_weight(batch.source.waste_weight), "25.0 kg");
    assert_eq!(format_co2(batch.impact.co2_saved), "12.5kg CO₂");

    let current = batch.current_step_index();
    let drawn: Vec<bool> = batch
        .journey
        .iter()
        .enumerate()
        .map(|(i, step)| step_visual(i, step, current).active)
        .collect();
    assert_eq!(drawn, vec![true, true, true, true, false]);
    assert_eq!(StepIcon::for_title(&batch.journey[0].title), StepIcon::Package);

    page.select_tab(BatchTab::Details);
    assert_eq!(page.batch(), Some(&batch));
}

/// A well-formed code for a batch nobody produced shows the not-found page.
#[test]
fn unknown_batch_is_not_found() {
    let catalog = MockCatalog::load().unwrap();
    let mut session = live_session();
    let id = navigate(&mut session, "https://koji.cph/batch/KC2099-999");
    assert_eq!(BatchPage::fetch(catalog.batches(), &id), BatchPage::NotFound);
}

/// Overdue aging keeps its status badge; only the bar is capped.
#[test]
fn overdue_aging_is_capped() {
    let catalog = MockCatalog::load().unwrap();
    let page = BatchPage::fetch(catalog.batches(), &BatchId::new("KC2024-017"));
    let batch = page.batch().unwrap();
    let aging = batch.aging.as_ref().unwrap();

    assert_eq!(aging.fill_percent(), 100.0);
    assert!(aging.target_reached());
    assert_eq!(batch.status.label(), "Aging");
    assert_eq!(format_weight(batch.source.waste_weight), "1.3 tons");
}

struct OfflineStore;

impl Repository<Batch> for OfflineStore {
    fn get_by_id(&self, _id: &str) -> Result<Option<Batch>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".into()))
    }

    fn list(&self) -> Result<Vec<Batch>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".into()))
    }
}

/// Pages work against any store, and a failing one reads as not found.
#[test]
fn page_accepts_any_repository() {
    let id = BatchId::new("KC2025-001");
    assert_eq!(BatchPage::fetch(&OfflineStore, &id), BatchPage::NotFound);

    let empty: InMemoryRepository<Batch> = InMemoryRepository::new(Vec::new()).unwrap();
    assert_eq!(BatchPage::fetch(&empty, &id), BatchPage::NotFound);
}
