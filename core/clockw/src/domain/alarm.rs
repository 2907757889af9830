//! アラーム一覧（挿入順の列）と分単位の一致判定
//!
//! アラームの識別子は列内の位置。発火したアラームはその場で列から取り除く。

use crate::domain::clock_face::to_12_hour;
use common::error::Error;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// "HH:MM"（00–23 / 00–59）
fn time_of_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("time-of-day pattern is valid")
    })
}

/// 1 件のアラーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alarm {
    /// 24 時間制 "HH:MM"
    time_of_day: String,
    /// 12 時間制 "HH:MM AM"
    display_label: String,
}

impl Alarm {
    /// 入力文字列を検証してアラームを作る（前後の空白は無視）
    pub fn parse(input: &str) -> Result<Self, Error> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::validation("alarm time is empty"));
        }
        let caps = time_of_day_re().captures(input).ok_or_else(|| {
            Error::validation(format!("invalid alarm time '{}' (expected HH:MM, 00:00-23:59)", input))
        })?;
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| Error::validation(format!("invalid hour in '{}'", input)))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| Error::validation(format!("invalid minute in '{}'", input)))?;

        let (hour12, meridiem) = to_12_hour(hour);
        Ok(Self {
            time_of_day: format!("{:02}:{:02}", hour, minute),
            display_label: format!("{:02}:{:02} {}", hour12, minute, meridiem),
        })
    }

    pub fn time_of_day(&self) -> &str {
        &self.time_of_day
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }
}

/// 挿入順を保つアラームの列
#[derive(Debug, Clone, Default)]
pub struct AlarmRegistry {
    alarms: Vec<Alarm>,
}

impl AlarmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 検証して末尾に追加する。失敗時は列を変更しない。
    pub fn add(&mut self, time_of_day: &str) -> Result<Alarm, Error> {
        let alarm = Alarm::parse(time_of_day)?;
        self.alarms.push(alarm.clone());
        Ok(alarm)
    }

    /// 現在の時・分に一致するアラームをすべて返し、列から取り除く
    ///
    /// 一致の収集と除去を分けるので、同じ時刻のアラームが並んでいても取りこぼさない。
    /// 戻り値は挿入順。
    pub fn check_and_trigger(&mut self, hour: u32, minute: u32) -> Vec<Alarm> {
        let current = format!("{:02}:{:02}", hour, minute);
        if !self.alarms.iter().any(|a| a.time_of_day == current) {
            return Vec::new();
        }
        let (triggered, remaining): (Vec<Alarm>, Vec<Alarm>) = std::mem::take(&mut self.alarms)
            .into_iter()
            .partition(|a| a.time_of_day == current);
        self.alarms = remaining;
        triggered
    }

    /// 位置 index のアラームを削除する。後ろの要素は 1 つ前に詰まる。
    pub fn remove(&mut self, index: usize) -> Result<Alarm, Error> {
        if index >= self.alarms.len() {
            return Err(Error::bounds(index, self.alarms.len()));
        }
        Ok(self.alarms.remove(index))
    }

    pub fn list(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }
}
