use domain::{DeviceRecord, DeviceSelector, TimeWindow, resolve_date, resolve_range};
use ping_query::{IngestError, PingQueryService, QueryError, RangeResult, filter_in_window};
use ping_storage::{InMemoryPingStore, PingStore, StorageError};
use std::collections::BTreeMap;
use std::sync::Arc;

fn service() -> PingQueryService {
    PingQueryService::new(Arc::new(InMemoryPingStore::new()))
}

fn device(id: &str) -> DeviceSelector {
    DeviceSelector::Device(id.to_string())
}

struct UnavailableStore;

#[async_trait::async_trait]
impl PingStore for UnavailableStore {
    async fn insert_ping(&self, _device_id: &str, _ts: i64) -> Result<bool, StorageError> {
        Err(StorageError::new("connection refused"))
    }

    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError> {
        Err(StorageError::new("connection refused"))
    }

    async fn find_device(&self, _device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        Err(StorageError::new("connection refused"))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::new("connection refused"))
    }
}

#[test]
fn filter_is_half_open() {
    let pings = [99, 100, 150, 199, 200];
    let selected = filter_in_window(&pings, TimeWindow::new(100, 200));
    assert_eq!(selected, vec![100, 150, 199]);
}

#[tokio::test]
async fn duplicate_pings_are_stored_once() {
    let service = service();
    assert!(service.record_ping("device-1", "100").await.expect("insert"));
    assert!(!service.record_ping("device-1", "100").await.expect("insert"));

    let outcome = service
        .query(&device("device-1"), TimeWindow::new(0, 1_000))
        .await;
    assert_eq!(outcome.result, RangeResult::Device(vec![100]));
    assert!(!outcome.client_error);
}

#[tokio::test]
async fn single_device_query_filters_by_date() {
    let service = service();
    // 2021-05-31T23:59:59Z, 2021-06-01T00:00:00Z, 2021-06-01T12:00:00Z, 2021-06-02T00:00:00Z
    for ts in ["1622505599", "1622505600", "1622548800", "1622592000"] {
        service.record_ping("device-1", ts).await.expect("insert");
    }
    let window = resolve_date("2021-06-01").expect("window");
    let outcome = service.query(&device("device-1"), window).await;
    assert_eq!(
        outcome.result,
        RangeResult::Device(vec![1_622_505_600, 1_622_548_800])
    );
    assert!(!outcome.client_error);
}

#[tokio::test]
async fn single_device_with_no_matches_is_empty_but_not_an_error() {
    let service = service();
    service.record_ping("device-1", "5").await.expect("insert");
    let outcome = service
        .query(&device("device-1"), TimeWindow::new(100, 200))
        .await;
    assert_eq!(outcome.result, RangeResult::Device(Vec::new()));
    assert!(!outcome.client_error);
}

#[tokio::test]
async fn unknown_device_is_empty_and_a_client_error() {
    let service = service();
    let outcome = service
        .query(&device("missing"), TimeWindow::new(0, 100))
        .await;
    assert_eq!(outcome.result, RangeResult::Device(Vec::new()));
    assert!(outcome.client_error);

    let err = service
        .try_query(&device("missing"), TimeWindow::new(0, 100))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::DeviceNotFound(id) if id == "missing"));
}

#[tokio::test]
async fn all_query_omits_devices_without_matches() {
    let service = service();
    service.record_ping("a", "100").await.expect("insert");
    service.record_ping("a", "200").await.expect("insert");
    service.record_ping("b", "150").await.expect("insert");

    let outcome = service
        .query(&DeviceSelector::All, TimeWindow::new(120, 180))
        .await;
    let mut expected = BTreeMap::new();
    expected.insert("b".to_string(), vec![150]);
    assert_eq!(outcome.result, RangeResult::All(expected));
    assert!(!outcome.client_error);
}

#[tokio::test]
async fn all_query_without_matches_is_an_empty_mapping() {
    let service = service();
    service.record_ping("a", "100").await.expect("insert");
    let outcome = service
        .query(&DeviceSelector::All, TimeWindow::new(500, 600))
        .await;
    assert_eq!(outcome.result, RangeResult::All(BTreeMap::new()));
    assert!(!outcome.client_error);
}

#[tokio::test]
async fn range_with_raw_epoch_end_is_exclusive() {
    let service = service();
    service.record_ping("a", "1622505600").await.expect("insert");
    service.record_ping("a", "1623200000").await.expect("insert");

    let window = resolve_range("2021-06-01", "1623200000").expect("window");
    let outcome = service.query(&device("a"), window).await;
    assert_eq!(outcome.result, RangeResult::Device(vec![1_622_505_600]));
}

#[tokio::test]
async fn clear_makes_devices_unknown() {
    let service = service();
    service.record_ping("a", "100").await.expect("insert");
    service.clear().await.expect("clear");

    assert!(service.list_device_ids().await.expect("list").is_empty());
    let outcome = service.query(&device("a"), TimeWindow::new(0, 1_000)).await;
    assert!(outcome.client_error);
}

#[tokio::test]
async fn list_device_ids_returns_every_device() {
    let service = service();
    service.record_ping("b", "1").await.expect("insert");
    service.record_ping("a", "2").await.expect("insert");
    service.record_ping("a", "3").await.expect("insert");
    assert_eq!(
        service.list_device_ids().await.expect("list"),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[tokio::test]
async fn record_ping_rejects_bad_input() {
    let service = service();
    assert!(matches!(
        service.record_ping("a", "soon").await,
        Err(IngestError::InvalidEpoch(_))
    ));
    assert!(matches!(
        service.record_ping("all", "100").await,
        Err(IngestError::ReservedDeviceId(_))
    ));
    assert!(service.list_device_ids().await.expect("list").is_empty());
}

#[tokio::test]
async fn store_failures_are_reported_not_fatal() {
    let service = PingQueryService::new(Arc::new(UnavailableStore));

    assert!(matches!(
        service.record_ping("a", "100").await,
        Err(IngestError::Storage(_))
    ));
    assert!(service.list_device_ids().await.is_err());
    assert!(service.clear().await.is_err());

    let outcome = service
        .query(&DeviceSelector::All, TimeWindow::new(0, 100))
        .await;
    assert_eq!(outcome.result, RangeResult::empty());
    assert!(outcome.client_error);
}
