//! 標準時刻実装（chrono::Local を委譲）

use crate::domain::Timestamp;
use crate::ports::outbound::TimeSource;

/// システムのローカルタイムゾーンで現在時刻を返す TimeSource 実装
#[derive(Debug, Clone, Default)]
pub struct LocalTimeSource;

impl TimeSource for LocalTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from(chrono::Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_source_returns_valid_fields() {
        let ts = LocalTimeSource.now();
        assert!(ts.hour() < 24);
        assert!(ts.minute() < 60);
        assert!(ts.second() < 60);
    }
}
