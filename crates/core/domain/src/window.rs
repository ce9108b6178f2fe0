//! 时间窗口解析。
//!
//! 把用户输入的两个 token（`YYYY-MM-DD` 日期或十进制 epoch 秒）解析为半开区间
//! `[start, end)`：
//! - 起点为日期时取当天 UTC 午夜
//! - 终点为日期时取次日 UTC 午夜（覆盖整天）
//! - 任一端为整数时原样使用，不做加一天调整

use chrono::{NaiveDate, NaiveTime};

/// 时间窗口解析错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("invalid time token: {0}")]
    InvalidTimeToken(String),
}

/// 半开时间区间 `[start, end)`，单位为 epoch 秒。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// `start <= ts < end`
    pub fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts < self.end
    }
}

enum TimeToken {
    Date(NaiveDate),
    Epoch(i64),
}

/// 严格解析 `YYYY-MM-DD`（四位年、两位月日，不接受多余字符）。
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

/// 日期当天 UTC 午夜对应的 epoch 秒。
pub fn midnight_epoch(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// 解析十进制有符号 64 位 epoch 秒。
pub fn parse_epoch(token: &str) -> Result<i64, WindowError> {
    token
        .parse::<i64>()
        .map_err(|_| WindowError::InvalidTimeToken(token.to_string()))
}

fn classify(token: &str) -> Result<TimeToken, WindowError> {
    if let Some(date) = parse_date(token) {
        return Ok(TimeToken::Date(date));
    }
    parse_epoch(token).map(TimeToken::Epoch)
}

fn next_midnight(date: NaiveDate, token: &str) -> Result<i64, WindowError> {
    date.succ_opt()
        .map(midnight_epoch)
        .ok_or_else(|| WindowError::InvalidTimeToken(token.to_string()))
}

/// 解析区间查询的起止 token。
///
/// 不校验 `start <= end`；倒置区间合法，只是匹配不到任何 ping。
pub fn resolve_range(from: &str, to: &str) -> Result<TimeWindow, WindowError> {
    let start = match classify(from)? {
        TimeToken::Date(date) => midnight_epoch(date),
        TimeToken::Epoch(value) => value,
    };
    let end = match classify(to)? {
        TimeToken::Date(date) => next_midnight(date, to)?,
        TimeToken::Epoch(value) => value,
    };
    Ok(TimeWindow::new(start, end))
}

/// 单日查询：`[当天午夜, 次日午夜)`。只接受日期，不接受 epoch。
pub fn resolve_date(token: &str) -> Result<TimeWindow, WindowError> {
    let date = parse_date(token).ok_or_else(|| WindowError::InvalidTimeToken(token.to_string()))?;
    Ok(TimeWindow::new(midnight_epoch(date), next_midnight(date, token)?))
}
