//! アダプター（描画面・音声トリガの端末向け実装）

pub mod audio;
pub mod dial;
pub mod terminal_surface;

pub use audio::{SilentAudio, TerminalBell};
pub use terminal_surface::{SurfaceMode, TerminalSurface};
