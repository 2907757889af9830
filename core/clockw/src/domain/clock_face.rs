//! 時計の文字盤（デジタル表示とアナログの針角度）
//!
//! Timestamp だけから決まる純粋関数。tick ごとに作り直す。

use common::domain::Timestamp;
use std::fmt;

/// 文字盤の目盛りの数（1 分ごと）
pub const MARKER_COUNT: usize = 60;

/// 午前 / 午後
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// 24 時間制の時から決める（12 時以降が PM）
    pub fn of(hour: u32) -> Self {
        if hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24 時間制の時を 12 時間制 (1–12) と AM/PM に変換する。0 時は 12 AM。
///
/// アラームの表示ラベルも同じ変換を使う。
pub fn to_12_hour(hour: u32) -> (u32, Meridiem) {
    let h = hour % 12;
    (if h == 0 { 12 } else { h }, Meridiem::of(hour))
}

/// 1 tick 分の表示値
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    pub hour12: u32,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Meridiem,
    /// 例: "Saturday, October 17, 2026"
    pub date_label: String,
    /// 度（12 時方向が 0、時計回り）
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

impl ClockDisplay {
    /// "HH:MM:SS AM" 形式（各 2 桁ゼロ埋め）
    pub fn digital(&self) -> String {
        format!(
            "{:02}:{:02}:{:02} {}",
            self.hour12, self.minute, self.second, self.meridiem
        )
    }
}

/// 文字盤の目盛り 1 つ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialMarker {
    pub angle: f64,
    /// 5 分ごとの時目盛り
    pub major: bool,
}

/// Timestamp から表示値を計算する
pub fn render(t: &Timestamp) -> ClockDisplay {
    let (hour12, meridiem) = to_12_hour(t.hour());
    ClockDisplay {
        hour12,
        minute: t.minute(),
        second: t.second(),
        meridiem,
        date_label: date_label(t),
        hour_angle: f64::from(t.hour() % 12) * 30.0 + f64::from(t.minute()) * 0.5,
        minute_angle: f64::from(t.minute()) * 6.0,
        second_angle: f64::from(t.second()) * 6.0,
    }
}

/// 曜日・月・日・年の長い形式
pub fn date_label(t: &Timestamp) -> String {
    t.date().format("%A, %B %-d, %Y").to_string()
}

/// 60 個の目盛り（i * 6 度、5 の倍数が時目盛り）
pub fn markers() -> Vec<DialMarker> {
    (0..MARKER_COUNT)
        .map(|i| DialMarker {
            angle: i as f64 * 6.0,
            major: i % 5 == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32, second: u32) -> Timestamp {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Timestamp::new(date, hour, minute, second).unwrap()
    }

    #[test]
    fn test_hour12_for_every_hour() {
        for h in 0..24 {
            let display = render(&at(h, 0, 0));
            let expected = if h % 12 == 0 { 12 } else { h % 12 };
            assert_eq!(display.hour12, expected, "hour {}", h);
            assert_eq!(display.meridiem, if h >= 12 { Meridiem::Pm } else { Meridiem::Am });
        }
    }

    #[test]
    fn test_midnight_and_afternoon() {
        assert_eq!(to_12_hour(0), (12, Meridiem::Am));
        assert_eq!(to_12_hour(12), (12, Meridiem::Pm));
        assert_eq!(to_12_hour(13), (1, Meridiem::Pm));
        assert_eq!(render(&at(0, 0, 0)).digital(), "12:00:00 AM");
        assert_eq!(render(&at(13, 5, 9)).digital(), "01:05:09 PM");
    }

    #[test]
    fn test_hour_angle_in_range_for_all_minutes() {
        for h in 0..24 {
            for m in 0..60 {
                let display = render(&at(h, m, 0));
                let expected = f64::from(h % 12) * 30.0 + f64::from(m) * 0.5;
                assert_eq!(display.hour_angle, expected);
                assert!((0.0..360.0).contains(&display.hour_angle));
            }
        }
    }

    #[test]
    fn test_minute_and_second_angles() {
        let display = render(&at(15, 45, 30));
        assert_eq!(display.hour_angle, 112.5);
        assert_eq!(display.minute_angle, 270.0);
        assert_eq!(display.second_angle, 180.0);

        let display = render(&at(23, 59, 59));
        assert_eq!(display.minute_angle, 354.0);
        assert_eq!(display.second_angle, 354.0);
    }

    #[test]
    fn test_date_label() {
        assert_eq!(render(&at(9, 0, 0)).date_label, "Saturday, October 17, 2026");
        let date = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
        let ts = Timestamp::new(date, 0, 0, 0).unwrap();
        assert_eq!(date_label(&ts), "Monday, March 1, 2027");
    }

    #[test]
    fn test_markers() {
        let markers = markers();
        assert_eq!(markers.len(), MARKER_COUNT);
        assert_eq!(markers.iter().filter(|m| m.major).count(), 12);
        assert_eq!(markers[0], DialMarker { angle: 0.0, major: true });
        assert_eq!(markers[7], DialMarker { angle: 42.0, major: false });
        assert_eq!(markers[55].angle, 330.0);
        assert!(markers[55].major);
    }
}
