//! 音声トリガの実装

use crate::ports::outbound::AudioTrigger;
use std::io::Write;

/// 端末ベル（BEL を stderr へ書く）
#[derive(Debug, Clone, Default)]
pub struct TerminalBell;

impl AudioTrigger for TerminalBell {
    fn play(&self) {
        let mut err = std::io::stderr();
        let _ = err.write_all(b"\x07");
        let _ = err.flush();
    }
}

/// 何も鳴らさない（--mute・テスト用）
#[derive(Debug, Clone, Default)]
pub struct SilentAudio;

impl AudioTrigger for SilentAudio {
    fn play(&self) {}
}
