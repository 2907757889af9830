//! 描画面 Outbound ポート
//!
//! usecase は Frame を組み立てて渡すだけで、描き方（端末・テスト用の記録など）は知らない。

use crate::domain::{Alarm, ClockDisplay, Theme, ThemeChoice};

/// ストップウォッチ表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchView {
    /// "HH:MM:SS"
    pub text: String,
    pub running: bool,
    /// 開始/停止ボタンのラベル（"Start" / "Stop"）
    pub control_label: String,
}

/// 1 回分の描画内容
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub display: ClockDisplay,
    pub stopwatch: StopwatchView,
    pub alarms: Vec<Alarm>,
    pub theme: Theme,
    pub themes: Vec<ThemeChoice>,
}

/// 描画面
pub trait RenderSurface: Send + Sync {
    /// フレーム全体を描画する
    fn render(&self, frame: &Frame);

    /// アラーム発火の通知（1 件ごとに呼ばれる）
    fn alarm_fired(&self, alarm: &Alarm);
}
