//! ストップウォッチ（Stopped / Running の 2 状態）
//!
//! 経過秒は tick 駆動で 1 ずつ増える。実時間は測らない。

use serde::Serialize;

/// ストップウォッチの状態スナップショット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StopwatchState {
    pub elapsed_seconds: u64,
    pub running: bool,
}

/// 経過秒を数えるカウンタ
#[derive(Debug, Clone, Default)]
pub struct StopwatchCounter {
    state: StopwatchState,
}

impl StopwatchCounter {
    /// 0 秒・停止状態で生成する
    pub fn new() -> Self {
        Self::default()
    }

    /// Stopped と Running を切り替える。切り替え自体は経過秒を変えない。
    pub fn toggle(&mut self) -> StopwatchState {
        self.state.running = !self.state.running;
        self.state
    }

    /// 停止中なら開始する（開始済みなら何もしない）
    pub fn start(&mut self) -> StopwatchState {
        if !self.state.running {
            self.toggle();
        }
        self.state
    }

    /// 動作中なら停止する（停止済みなら何もしない）
    pub fn stop(&mut self) -> StopwatchState {
        if self.state.running {
            self.toggle();
        }
        self.state
    }

    /// Running のときだけ 1 秒進める
    pub fn tick(&mut self) {
        if self.state.running {
            self.state.elapsed_seconds += 1;
        }
    }

    /// 状態に関係なく 0 秒・停止に戻す
    pub fn reset(&mut self) -> StopwatchState {
        self.state = StopwatchState::default();
        self.state
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// "HH:MM:SS"
    pub fn format(&self) -> String {
        format_elapsed(self.state.elapsed_seconds)
    }

    /// 開始/停止ボタンの表示
    pub fn toggle_label(&self) -> &'static str {
        if self.state.running {
            "Stop"
        } else {
            "Start"
        }
    }
}

/// 経過秒を "HH:MM:SS" にする。時は上限なし（最低 2 桁）。
pub fn format_elapsed(elapsed_seconds: u64) -> String {
    let hours = elapsed_seconds / 3600;
    let minutes = (elapsed_seconds % 3600) / 60;
    let seconds = elapsed_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
