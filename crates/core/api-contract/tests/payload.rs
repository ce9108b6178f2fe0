use api_contract::{MetricsSnapshotDto, PingsPayload};
use std::collections::BTreeMap;

#[test]
fn single_device_payload_is_flat_array() {
    let payload = PingsPayload::Pings(vec![1, 2]);
    let body = serde_json::to_string(&payload).expect("serialize");
    assert_eq!(body, "[1,2]");
}

#[test]
fn all_devices_payload_is_mapping() {
    let mut devices = BTreeMap::new();
    devices.insert("b".to_string(), vec![150]);
    devices.insert("a".to_string(), vec![100]);
    let body = serde_json::to_string(&PingsPayload::from_devices(devices)).expect("serialize");
    assert_eq!(body, r#"{"a":[100],"b":[150]}"#);
}

#[test]
fn empty_mapping_serializes_as_empty_array() {
    let payload = PingsPayload::from_devices(BTreeMap::new());
    assert_eq!(payload, PingsPayload::empty());
    assert_eq!(serde_json::to_string(&payload).expect("serialize"), "[]");
}

#[test]
fn metrics_snapshot_is_camel_case() {
    let dto = MetricsSnapshotDto {
        pings_inserted: 1,
        pings_duplicate: 0,
        pings_rejected: 0,
        queries_served: 2,
        queries_rejected: 0,
        store_failures: 0,
    };
    let value = serde_json::to_value(dto).expect("serialize");
    assert_eq!(value["pingsInserted"], 1);
    assert!(value.get("pings_inserted").is_none());
}
