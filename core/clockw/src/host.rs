//! ホストループ（tick 源と入力面）
//!
//! メインスレッドだけがウィジェットに触れる。stdin 読み取りスレッドと Ctrl-C ハンドラは
//! 所有済みの HostEvent をチャネルに送るだけで、tick と入力処理が重なることはない。

use std::io::BufRead;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::WidgetCommand;
use crate::ports::inbound::WidgetPort;
use crate::usecase::Outcome;

/// 入力面からのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// stdin の 1 行
    Line(String),
    /// stdin が閉じた（tick は続ける）
    Eof,
    /// Ctrl-C
    Interrupt,
}

#[derive(Debug, Clone)]
pub struct HostOptions {
    pub interval: Duration,
    /// この回数 tick したら終了（None なら無制限）
    pub max_ticks: Option<u64>,
}

enum Flow {
    Continue,
    Quit,
}

/// stdin を 1 行ずつ HostEvent::Line として送るスレッドを起動する
pub fn spawn_stdin_reader(tx: Sender<HostEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(HostEvent::Line(l)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(HostEvent::Eof);
    })
}

fn emit(log: &dyn Log, record: LogRecord) {
    let _ = log.log(&record.layer("host"));
}

fn report_error(log: &dyn Log, line: &str, err: &Error) {
    eprintln!("clockw: {}", err);
    let level = if err.is_recoverable() {
        LogLevel::Warn
    } else {
        LogLevel::Error
    };
    emit(
        log,
        LogRecord::new(level, "input rejected")
            .kind("input")
            .field("line", line)
            .field("error", err.to_string()),
    );
}

/// 1 行の入力を処理する
fn handle_line(widget: &mut dyn WidgetPort, line: &str, log: &dyn Log) -> Flow {
    if line.trim().is_empty() {
        return Flow::Continue;
    }
    let command = match WidgetCommand::parse(line) {
        Ok(c) => c,
        Err(e) => {
            report_error(log, line, &e);
            return Flow::Continue;
        }
    };
    match widget.dispatch(command) {
        Ok(Outcome::Quit) => Flow::Quit,
        Ok(outcome) => {
            if let Some(msg) = outcome.message() {
                eprintln!("{}", msg);
            }
            Flow::Continue
        }
        Err(e) => {
            report_error(log, line, &e);
            Flow::Continue
        }
    }
}

/// tick と入力を交互に処理する。終了までに実行した tick 数を返す。
///
/// 最初の tick は即座に行う。以降は次の tick 時刻まで入力を待ち、時刻が来たら tick する。
pub fn run_loop(
    widget: &mut dyn WidgetPort,
    rx: &Receiver<HostEvent>,
    options: &HostOptions,
    log: &dyn Log,
) -> u64 {
    let mut ticks: u64 = 0;
    let mut next_tick = Instant::now();

    loop {
        let now = Instant::now();
        if now >= next_tick {
            if options.max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }
            let report = widget.tick();
            ticks += 1;
            if !report.triggered.is_empty() {
                emit(
                    log,
                    LogRecord::new(LogLevel::Debug, "tick fired alarms")
                        .kind("alarm")
                        .field("at", report.display.digital())
                        .field("count", report.triggered.len()),
                );
            }
            next_tick += options.interval;
            if next_tick <= now {
                // 処理が遅れたぶんは追いかけずに間隔を取り直す
                next_tick = now + options.interval;
            }
            continue;
        }

        let timeout = next_tick.saturating_duration_since(now);
        match rx.recv_timeout(timeout) {
            Ok(HostEvent::Line(line)) => {
                if let Flow::Quit = handle_line(widget, &line, log) {
                    break;
                }
            }
            Ok(HostEvent::Eof) => {
                emit(log, LogRecord::new(LogLevel::Debug, "input closed").kind("input"));
            }
            Ok(HostEvent::Interrupt) => {
                emit(log, LogRecord::new(LogLevel::Info, "interrupted").kind("lifecycle"));
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => thread::sleep(timeout),
        }
    }
    ticks
}
