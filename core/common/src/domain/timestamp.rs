//! 壁時計のスナップショット
//!
//! tick ごとに TimeSource から 1 つ生成され、以降は変更されない。

use crate::error::Error;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// ある瞬間のローカル壁時計時刻（時 0–23 / 分 0–59 / 秒 0–59 と日付）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Timestamp {
    /// 各フィールドを検証して生成する
    pub fn new(date: NaiveDate, hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::validation(format!("hour must be 0-23, got {}", hour)));
        }
        if minute > 59 {
            return Err(Error::validation(format!("minute must be 0-59, got {}", minute)));
        }
        if second > 59 {
            return Err(Error::validation(format!("second must be 0-59, got {}", second)));
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            date: dt.date(),
            hour: dt.hour(),
            minute: dt.minute(),
            // うるう秒は chrono では nanosecond 側で表現されるため second は常に 0–59
            second: dt.second().min(59),
        }
    }
}
