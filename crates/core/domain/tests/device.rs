use domain::{DeviceRecord, DeviceSelector};

#[test]
fn selector_recognises_reserved_all() {
    assert_eq!(DeviceSelector::parse("all"), DeviceSelector::All);
    assert_eq!(
        DeviceSelector::parse("device-1"),
        DeviceSelector::Device("device-1".to_string())
    );
    assert_eq!(
        DeviceSelector::parse("ALL"),
        DeviceSelector::Device("ALL".to_string())
    );
}

#[test]
fn device_record_collapses_duplicates() {
    let record = DeviceRecord::with_pings("device-1", [5, 5, 7]);
    assert_eq!(record.pings.len(), 2);
}
