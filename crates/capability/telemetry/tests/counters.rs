use ping_telemetry::{metrics, record_ping_duplicate, record_ping_inserted, record_store_failure};

#[test]
fn counters_only_grow() {
    let before = metrics().snapshot();
    record_ping_inserted();
    record_ping_inserted();
    record_ping_duplicate();
    record_store_failure();
    let after = metrics().snapshot();

    assert!(after.pings_inserted >= before.pings_inserted + 2);
    assert!(after.pings_duplicate >= before.pings_duplicate + 1);
    assert!(after.store_failures >= before.store_failures + 1);
}
