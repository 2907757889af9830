//! 端末向けの描画面
//!
//! Full: 画面を消してアナログ文字盤つきで描き直す（stdout が端末のとき）。
//! Compact: 1 フレーム 1 行（パイプ・--compact）。

use crate::adapter::dial;
use crate::domain::{Alarm, Theme};
use crate::ports::outbound::{Frame, RenderSurface};
use std::io::Write;
use std::sync::Mutex;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";
const PANEL_WIDTH: usize = 48;
/// 発火通知を画面に残すフレーム数（約 1 分）
const BANNER_FRAMES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMode {
    Full,
    Compact,
}

/// テーマごとの前景/背景色
fn palette(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\x1b[30;47m",
        Theme::Dark => "\x1b[97;40m",
        Theme::Ocean => "\x1b[97;44m",
        Theme::Sunset => "\x1b[30;43m",
    }
}

struct Banner {
    text: String,
    frames_left: u32,
}

pub struct TerminalSurface {
    mode: SurfaceMode,
    banner: Mutex<Option<Banner>>,
}

impl TerminalSurface {
    pub fn new(mode: SurfaceMode) -> Self {
        Self {
            mode,
            banner: Mutex::new(None),
        }
    }

    /// 描画する文字列を組み立てる（バナーの残りフレームを 1 つ消費する）
    pub fn compose(&self, frame: &Frame) -> String {
        let banner = self.take_banner_line();
        match self.mode {
            SurfaceMode::Full => compose_full(frame, banner.as_deref()),
            SurfaceMode::Compact => compose_compact(frame),
        }
    }

    fn take_banner_line(&self) -> Option<String> {
        let mut guard = self.banner.lock().unwrap_or_else(|e| e.into_inner());
        let line = guard.as_ref().map(|b| b.text.clone());
        let expired = match guard.as_mut() {
            Some(b) => {
                b.frames_left = b.frames_left.saturating_sub(1);
                b.frames_left == 0
            }
            None => false,
        };
        if expired {
            *guard = None;
        }
        line
    }
}

fn alarm_summary(alarms: &[Alarm]) -> String {
    if alarms.is_empty() {
        return "(none)".to_string();
    }
    alarms
        .iter()
        .enumerate()
        .map(|(i, a)| format!("[{}] {}", i, a.display_label()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn compose_full(frame: &Frame, banner: Option<&str>) -> String {
    let mut lines = Vec::new();
    lines.push(" clockw".to_string());
    for row in dial::draw(&frame.display) {
        lines.push(format!("  {}", row));
    }
    lines.push(String::new());
    lines.push(format!("  {}", frame.display.digital()));
    lines.push(format!("  {}", frame.display.date_label));
    lines.push(String::new());
    let state = if frame.stopwatch.running { "running" } else { "stopped" };
    lines.push(format!(
        "  Stopwatch  {}  [{}]  {}",
        frame.stopwatch.text, frame.stopwatch.control_label, state
    ));
    lines.push(format!("  Alarms     {}", alarm_summary(&frame.alarms)));
    let themes: Vec<String> = frame
        .themes
        .iter()
        .map(|c| {
            if c.active {
                format!("*{}*", c.theme)
            } else {
                c.theme.to_string()
            }
        })
        .collect();
    lines.push(format!("  Themes     {}", themes.join(" ")));
    if let Some(text) = banner {
        lines.push(String::new());
        lines.push(format!("  !! {}", text));
    }
    lines.push(String::new());
    lines.push("  type 'help' for commands".to_string());

    let style = palette(frame.theme);
    let mut out = String::from(CLEAR_SCREEN);
    for line in lines {
        out.push_str(&format!("{}{:<width$}{}\n", style, line, RESET, width = PANEL_WIDTH));
    }
    out
}

fn compose_compact(frame: &Frame) -> String {
    let state = if frame.stopwatch.running { "running" } else { "stopped" };
    format!(
        "{} | {} | stopwatch {} ({}) | alarms: {} | theme {}\n",
        frame.display.digital(),
        frame.display.date_label,
        frame.stopwatch.text,
        state,
        alarm_summary(&frame.alarms),
        frame.theme
    )
}

impl RenderSurface for TerminalSurface {
    fn render(&self, frame: &Frame) {
        let text = self.compose(frame);
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    fn alarm_fired(&self, alarm: &Alarm) {
        let text = format!("Alarm: {}", alarm.display_label());
        match self.mode {
            SurfaceMode::Full => {
                let mut guard = self.banner.lock().unwrap_or_else(|e| e.into_inner());
                *guard = Some(Banner {
                    text,
                    frames_left: BANNER_FRAMES,
                });
            }
            SurfaceMode::Compact => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{}", text);
                let _ = out.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock_face::render;
    use crate::domain::ThemeSelector;
    use crate::ports::outbound::StopwatchView;
    use chrono::NaiveDate;
    use common::domain::Timestamp;

    fn frame(theme: &str, alarms: &[&str], running: bool) -> Frame {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut selector = ThemeSelector::new();
        selector.select(theme).unwrap();
        Frame {
            display: render(&Timestamp::new(date, 22, 42, 7).unwrap()),
            stopwatch: StopwatchView {
                text: "00:01:03".to_string(),
                running,
                control_label: if running { "Stop" } else { "Start" }.to_string(),
            },
            alarms: alarms.iter().map(|t| Alarm::parse(t).unwrap()).collect(),
            theme: selector.current(),
            themes: selector.choices(),
        }
    }

    #[test]
    fn test_compact_line() {
        let surface = TerminalSurface::new(SurfaceMode::Compact);
        let line = surface.compose(&frame("dark", &["07:00", "13:30"], true));
        assert_eq!(
            line,
            "10:42:07 PM | Saturday, October 17, 2026 | stopwatch 00:01:03 (running) \
             | alarms: [0] 07:00 AM  [1] 01:30 PM | theme dark\n"
        );
    }

    #[test]
    fn test_full_frame_contents() {
        let surface = TerminalSurface::new(SurfaceMode::Full);
        let text = surface.compose(&frame("ocean", &[], false));
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("10:42:07 PM"));
        assert!(text.contains("Saturday, October 17, 2026"));
        assert!(text.contains("Stopwatch  00:01:03  [Start]  stopped"));
        assert!(text.contains("Alarms     (none)"));
        assert!(text.contains("Themes     light dark *ocean* sunset"));
        assert!(text.contains(palette(Theme::Ocean)));
    }

    #[test]
    fn test_banner_shown_after_alarm_and_expires() {
        let surface = TerminalSurface::new(SurfaceMode::Full);
        let f = frame("dark", &[], false);
        surface.alarm_fired(&Alarm::parse("07:00").unwrap());
        for _ in 0..BANNER_FRAMES {
            assert!(surface.compose(&f).contains("!! Alarm: 07:00 AM"));
        }
        assert!(!surface.compose(&f).contains("Alarm: 07:00 AM"));
    }
}
