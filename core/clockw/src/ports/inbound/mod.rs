//! Inbound ポート: ホストループがウィジェットを駆動するインターフェース

use crate::domain::{Alarm, ClockDisplay, WidgetCommand};
use crate::usecase::Outcome;
use common::error::Error;

/// 1 tick の結果
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub display: ClockDisplay,
    /// この tick で発火したアラーム（挿入順）
    pub triggered: Vec<Alarm>,
}

/// tick 源と入力面から呼ばれるウィジェット
///
/// タイマー・テスト用ハーネスなど、どのホストからでも同じ形で呼び出せる。
/// 呼び出しは重ならない前提（&mut self）。
pub trait WidgetPort {
    /// 周期 tick（公称 1 Hz）
    fn tick(&mut self) -> TickReport;

    /// ユーザー操作を適用する。失敗時は状態を変えない。
    fn dispatch(&mut self, command: WidgetCommand) -> Result<Outcome, Error>;
}
