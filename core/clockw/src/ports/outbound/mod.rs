//! Outbound ポート: 描画面・音声トリガ

pub mod audio;
pub mod render_surface;

pub use audio::AudioTrigger;
pub use render_surface::{Frame, RenderSurface, StopwatchView};
