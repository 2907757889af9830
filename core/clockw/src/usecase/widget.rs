//! ウィジェットのユースケース（Scheduler / Presenter）
//!
//! ストップウォッチ・アラーム一覧・テーマを所有し、tick ごとに
//! 時刻取得 → 文字盤計算 → アラーム判定 → ストップウォッチ更新 → 描画 を行う。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord, TimeSource};

use crate::domain::command::COMMAND_HELP;
use crate::domain::{
    clock_face, Alarm, AlarmRegistry, ClockDisplay, StopwatchCounter, StopwatchState, Theme,
    ThemeSelector, WidgetCommand,
};
use crate::ports::inbound::{TickReport, WidgetPort};
use crate::ports::outbound::{AudioTrigger, Frame, RenderSurface, StopwatchView};

/// dispatch の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Stopwatch(StopwatchState),
    AlarmAdded(Alarm),
    AlarmRemoved(Alarm),
    Alarms(Vec<Alarm>),
    ThemeChanged(Theme),
    Help,
    Quit,
}

impl Outcome {
    /// 入力面へ返す短いフィードバック
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Stopwatch(state) => {
                let text = crate::domain::stopwatch::format_elapsed(state.elapsed_seconds);
                if state.running {
                    Some(format!("stopwatch running ({})", text))
                } else {
                    Some(format!("stopwatch stopped ({})", text))
                }
            }
            Outcome::AlarmAdded(alarm) => Some(format!("alarm set for {}", alarm.display_label())),
            Outcome::AlarmRemoved(alarm) => {
                Some(format!("alarm {} deleted", alarm.display_label()))
            }
            Outcome::Alarms(alarms) => {
                if alarms.is_empty() {
                    return Some("(no alarms)".to_string());
                }
                let lines: Vec<String> = alarms
                    .iter()
                    .enumerate()
                    .map(|(i, a)| format!("[{}] {}", i, a.display_label()))
                    .collect();
                Some(lines.join("\n"))
            }
            Outcome::ThemeChanged(theme) => Some(format!("theme: {}", theme)),
            Outcome::Help => Some(COMMAND_HELP.to_string()),
            Outcome::Quit => None,
        }
    }
}

/// ウィジェット本体
pub struct WidgetUseCase {
    time_source: Arc<dyn TimeSource>,
    surface: Arc<dyn RenderSurface>,
    audio: Arc<dyn AudioTrigger>,
    log: Arc<dyn Log>,
    stopwatch: StopwatchCounter,
    alarms: AlarmRegistry,
    theme: ThemeSelector,
    last_display: Option<ClockDisplay>,
}

impl WidgetUseCase {
    pub fn new(
        time_source: Arc<dyn TimeSource>,
        surface: Arc<dyn RenderSurface>,
        audio: Arc<dyn AudioTrigger>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            time_source,
            surface,
            audio,
            log,
            stopwatch: StopwatchCounter::new(),
            alarms: AlarmRegistry::new(),
            theme: ThemeSelector::new(),
            last_display: None,
        }
    }

    pub fn stopwatch(&self) -> &StopwatchCounter {
        &self.stopwatch
    }

    pub fn alarms(&self) -> &AlarmRegistry {
        &self.alarms
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// 現在の描画内容。まだ tick していなければその場で時刻を取る。
    pub fn frame(&self) -> Frame {
        let display = match &self.last_display {
            Some(d) => d.clone(),
            None => clock_face::render(&self.time_source.now()),
        };
        self.frame_with(display)
    }

    fn frame_with(&self, display: ClockDisplay) -> Frame {
        Frame {
            display,
            stopwatch: StopwatchView {
                text: self.stopwatch.format(),
                running: self.stopwatch.is_running(),
                control_label: self.stopwatch.toggle_label().to_string(),
            },
            alarms: self.alarms.list().to_vec(),
            theme: self.theme.current(),
            themes: self.theme.choices(),
        }
    }

    fn emit(&self, record: LogRecord) {
        // ログ書き込みの失敗でウィジェットは止めない
        let _ = self.log.log(&record.layer("usecase"));
    }

    fn apply(&mut self, command: WidgetCommand) -> Result<Outcome, Error> {
        match command {
            WidgetCommand::Start => Ok(Outcome::Stopwatch(self.stopwatch.start())),
            WidgetCommand::Stop => Ok(Outcome::Stopwatch(self.stopwatch.stop())),
            WidgetCommand::Toggle => Ok(Outcome::Stopwatch(self.stopwatch.toggle())),
            WidgetCommand::Reset => Ok(Outcome::Stopwatch(self.stopwatch.reset())),
            WidgetCommand::AlarmAdd(time) => {
                let alarm = self.alarms.add(&time)?;
                self.emit(
                    LogRecord::new(LogLevel::Info, "alarm added")
                        .kind("alarm")
                        .field("time", alarm.time_of_day())
                        .field("count", self.alarms.len()),
                );
                Ok(Outcome::AlarmAdded(alarm))
            }
            WidgetCommand::AlarmRemove(index) => {
                let alarm = self.alarms.remove(index)?;
                self.emit(
                    LogRecord::new(LogLevel::Info, "alarm deleted")
                        .kind("alarm")
                        .field("index", index)
                        .field("time", alarm.time_of_day()),
                );
                Ok(Outcome::AlarmRemoved(alarm))
            }
            WidgetCommand::AlarmList => Ok(Outcome::Alarms(self.alarms.list().to_vec())),
            WidgetCommand::Theme(name) => {
                let theme = self.theme.select(&name)?;
                self.emit(
                    LogRecord::new(LogLevel::Info, "theme changed")
                        .kind("theme")
                        .field("theme", theme.name())
                        .field("class", theme.css_class()),
                );
                Ok(Outcome::ThemeChanged(theme))
            }
            WidgetCommand::Help => Ok(Outcome::Help),
            WidgetCommand::Quit => Ok(Outcome::Quit),
        }
    }
}

impl WidgetPort for WidgetUseCase {
    fn tick(&mut self) -> TickReport {
        let now = self.time_source.now();
        let display = clock_face::render(&now);

        let triggered = self.alarms.check_and_trigger(now.hour(), now.minute());
        for alarm in &triggered {
            self.audio.play();
            self.surface.alarm_fired(alarm);
            self.emit(
                LogRecord::new(LogLevel::Info, "alarm triggered")
                    .kind("alarm")
                    .field(
                        "alarm",
                        serde_json::to_value(alarm).unwrap_or(serde_json::Value::Null),
                    ),
            );
        }

        self.stopwatch.tick();

        self.last_display = Some(display.clone());
        self.surface.render(&self.frame_with(display.clone()));

        TickReport { display, triggered }
    }

    fn dispatch(&mut self, command: WidgetCommand) -> Result<Outcome, Error> {
        let outcome = self.apply(command)?;
        if let Outcome::Stopwatch(state) = &outcome {
            self.emit(
                LogRecord::new(LogLevel::Debug, "stopwatch changed")
                    .kind("stopwatch")
                    .field(
                        "state",
                        serde_json::to_value(state).unwrap_or(serde_json::Value::Null),
                    ),
            );
        }
        if !matches!(outcome, Outcome::Quit | Outcome::Help | Outcome::Alarms(_)) {
            self.surface.render(&self.frame());
        }
        Ok(outcome)
    }
}
