//! 配線: 標準アダプタで WidgetUseCase を組み立てる

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, LocalTimeSource, NoopLog, StderrLog};
use common::ports::outbound::{EnvResolver, Log, TimeSource};

use crate::adapter::{SilentAudio, SurfaceMode, TerminalBell, TerminalSurface};
use crate::cli::Config;
use crate::ports::outbound::{AudioTrigger, RenderSurface};
use crate::usecase::WidgetUseCase;

/// 配線で組み立てたウィジェットとロガー
pub struct App {
    pub widget: WidgetUseCase,
    /// 構造化ログ。lifecycle / host のログにも使う。
    pub logger: Arc<dyn Log>,
}

/// ログの出力先を決める（--verbose > --log-file > CLOCKW_LOG_FILE / 既定パス）
fn wire_logger(config: &Config, env: &dyn EnvResolver) -> Arc<dyn Log> {
    if config.verbose {
        return Arc::new(StderrLog);
    }
    let path = match &config.log_file {
        Some(p) => Ok(PathBuf::from(p)),
        None => env.resolve_log_file_path(),
    };
    match path {
        Ok(p) => Arc::new(FileJsonLog::new(p)),
        Err(_) => Arc::new(NoopLog),
    }
}

/// 描画モード（stdout が端末でなければ 1 行モード）
fn surface_mode(config: &Config, stdout_is_terminal: bool) -> SurfaceMode {
    if config.compact || !stdout_is_terminal {
        SurfaceMode::Compact
    } else {
        SurfaceMode::Full
    }
}

/// 時刻源と描画面を差し替えて組み立てる
pub fn wire_with(
    config: &Config,
    env: &dyn EnvResolver,
    time_source: Arc<dyn TimeSource>,
    surface: Arc<dyn RenderSurface>,
) -> App {
    let logger = wire_logger(config, env);
    let audio: Arc<dyn AudioTrigger> = if config.mute {
        Arc::new(SilentAudio)
    } else {
        Arc::new(TerminalBell)
    };
    let widget = WidgetUseCase::new(time_source, surface, audio, Arc::clone(&logger));
    App { widget, logger }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_clockw(config: &Config, env: &dyn EnvResolver) -> App {
    let mode = surface_mode(config, std::io::stdout().is_terminal());
    let surface: Arc<dyn RenderSurface> = Arc::new(TerminalSurface::new(mode));
    wire_with(config, env, Arc::new(LocalTimeSource), surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Alarm, WidgetCommand};
    use crate::ports::inbound::WidgetPort;
    use crate::ports::outbound::Frame;
    use chrono::NaiveDate;
    use common::adapter::FixedTimeSource;
    use common::domain::Timestamp;
    use common::error::Error;
    use tempfile::tempdir;

    struct TestEnvResolver {
        log_path: Option<PathBuf>,
    }

    impl EnvResolver for TestEnvResolver {
        fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
            Err(Error::env("home is not used in test"))
        }

        fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
            self.log_path
                .clone()
                .ok_or_else(|| Error::env("HOME is not set"))
        }

        fn default_theme(&self) -> Option<String> {
            None
        }
    }

    struct NullSurface;

    impl RenderSurface for NullSurface {
        fn render(&self, _frame: &Frame) {}
        fn alarm_fired(&self, _alarm: &Alarm) {}
    }

    fn time_source() -> Arc<dyn TimeSource> {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        Arc::new(FixedTimeSource::new(Timestamp::new(date, 7, 0, 0).unwrap()))
    }

    #[test]
    fn test_surface_mode() {
        let config = Config::default();
        assert_eq!(surface_mode(&config, true), SurfaceMode::Full);
        assert_eq!(surface_mode(&config, false), SurfaceMode::Compact);
        let compact = Config {
            compact: true,
            ..Default::default()
        };
        assert_eq!(surface_mode(&compact, true), SurfaceMode::Compact);
    }

    #[test]
    fn test_wired_widget_logs_to_env_log_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("state").join("clockw.jsonl");
        let env = TestEnvResolver {
            log_path: Some(log_path.clone()),
        };
        let mut app = wire_with(
            &Config {
                mute: true,
                ..Default::default()
            },
            &env,
            time_source(),
            Arc::new(NullSurface),
        );

        app.widget
            .dispatch(WidgetCommand::AlarmAdd("07:00".to_string()))
            .unwrap();
        let report = app.widget.tick();
        assert_eq!(report.triggered.len(), 1);

        let content = std::fs::read_to_string(&log_path).unwrap();
        let messages: Vec<String> = content
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["message"].to_string())
            .collect();
        assert_eq!(messages, vec!["\"alarm added\"", "\"alarm triggered\""]);
    }

    #[test]
    fn test_cli_log_file_overrides_env() {
        let dir = tempdir().unwrap();
        let cli_path = dir.path().join("cli.jsonl");
        let env_path = dir.path().join("env.jsonl");
        let env = TestEnvResolver {
            log_path: Some(env_path.clone()),
        };
        let config = Config {
            log_file: Some(cli_path.to_string_lossy().to_string()),
            mute: true,
            ..Default::default()
        };
        let mut app = wire_with(&config, &env, time_source(), Arc::new(NullSurface));
        app.widget
            .dispatch(WidgetCommand::Theme("light".to_string()))
            .unwrap();

        assert!(cli_path.exists());
        assert!(!env_path.exists());
    }

    #[test]
    fn test_unresolvable_log_path_falls_back_to_noop() {
        let env = TestEnvResolver { log_path: None };
        let config = Config {
            mute: true,
            ..Default::default()
        };
        let mut app = wire_with(&config, &env, time_source(), Arc::new(NullSurface));
        assert!(app
            .widget
            .dispatch(WidgetCommand::AlarmAdd("08:00".to_string()))
            .is_ok());
    }
}
