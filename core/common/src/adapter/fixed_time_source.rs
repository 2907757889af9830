//! 固定時刻の TimeSource（テスト用）

use crate::domain::Timestamp;
use crate::ports::outbound::TimeSource;
use std::sync::Mutex;

/// 設定した時刻をそのまま返す TimeSource 実装
///
/// `set` で差し替えるまで同じ Timestamp を返し続ける。
#[derive(Debug)]
pub struct FixedTimeSource {
    current: Mutex<Timestamp>,
}

impl FixedTimeSource {
    pub fn new(at: Timestamp) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    pub fn set(&self, at: Timestamp) {
        let mut guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *guard = at;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_time_source_set() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let source = FixedTimeSource::new(Timestamp::new(date, 7, 0, 0).unwrap());
        assert_eq!(source.now().hour(), 7);
        assert_eq!(source.now(), source.now());

        source.set(Timestamp::new(date, 19, 30, 5).unwrap());
        let now = source.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (19, 30, 5));
    }
}
