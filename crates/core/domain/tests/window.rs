use domain::{TimeWindow, WindowError, resolve_date, resolve_range};

// 2021-06-01T00:00:00Z / 2021-06-02T00:00:00Z
const JUNE_1: i64 = 1_622_505_600;
const JUNE_2: i64 = 1_622_592_000;

#[test]
fn single_date_covers_whole_day() {
    let window = resolve_date("2021-06-01").expect("window");
    assert_eq!(window, TimeWindow::new(JUNE_1, JUNE_2));
}

#[test]
fn single_date_rejects_epoch_token() {
    let err = resolve_date("1622505600").unwrap_err();
    assert_eq!(err, WindowError::InvalidTimeToken("1622505600".to_string()));
}

#[test]
fn range_of_dates_extends_end_by_one_day() {
    let window = resolve_range("2021-06-01", "2021-06-01").expect("window");
    assert_eq!(window, TimeWindow::new(JUNE_1, JUNE_2));
}

#[test]
fn range_with_raw_epoch_end_is_verbatim() {
    let window = resolve_range("2021-06-01", "1623200000").expect("window");
    assert_eq!(window.start, JUNE_1);
    assert_eq!(window.end, 1_623_200_000);
}

#[test]
fn range_with_raw_epoch_start_and_date_end() {
    let window = resolve_range("100", "2021-06-01").expect("window");
    assert_eq!(window, TimeWindow::new(100, JUNE_2));
}

#[test]
fn range_accepts_negative_epochs() {
    let window = resolve_range("-50", "-10").expect("window");
    assert_eq!(window, TimeWindow::new(-50, -10));
}

#[test]
fn range_rejects_garbage_tokens() {
    assert!(matches!(
        resolve_range("yesterday", "100"),
        Err(WindowError::InvalidTimeToken(token)) if token == "yesterday"
    ));
    assert!(matches!(
        resolve_range("100", "1.5"),
        Err(WindowError::InvalidTimeToken(token)) if token == "1.5"
    ));
}

#[test]
fn inverted_range_is_allowed() {
    let window = resolve_range("200", "100").expect("window");
    assert!(!window.contains(150));
}

#[test]
fn window_is_half_open() {
    let window = TimeWindow::new(100, 200);
    assert!(window.contains(100));
    assert!(window.contains(199));
    assert!(!window.contains(200));
    assert!(!window.contains(99));
}
