mod adapter;
mod cli;
mod domain;
mod host;
mod ports;
mod usecase;
mod wiring;

use std::process;
use std::sync::mpsc;
use std::time::Duration;

use cli::{parse_args, print_completion, startup_commands, Config, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{EnvResolver, LogLevel, LogRecord};
use host::{HostEvent, HostOptions};
use ports::inbound::WidgetPort;
use wiring::wire_clockw;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("clockw: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: clockw [-h] [-t theme] [-a HH:MM]... [-n ticks] [--interval-ms ms] [-l log-file] [-v] [-m] [-c]");
}

fn print_help() {
    println!("Usage: clockw [-h] [-t theme] [-a HH:MM]... [-n ticks] [--interval-ms ms] [-l log-file] [-v] [-m] [-c]");
    println!("  -h, --help            Display this help message.");
    println!("  -t, --theme <name>    Initial theme: light, dark (default), ocean, sunset.");
    println!("  -a, --alarm <HH:MM>   Add an alarm at startup (24-hour time). Repeatable.");
    println!("  -n, --ticks <count>   Exit after <count> ticks.");
    println!("  --interval-ms <ms>    Tick interval in milliseconds (default 1000).");
    println!("  -l, --log-file <path> Write JSONL logs to <path>.");
    println!("  -v, --verbose         Print logs to stderr instead of the log file.");
    println!("  -m, --mute            Do not ring the terminal bell when an alarm fires.");
    println!("  -c, --compact         One line per frame instead of the full-screen clock face.");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  CLOCKW_THEME      Initial theme when -t is not given.");
    println!("  CLOCKW_LOG_FILE   Log file when -l is not given.");
    println!("  CLOCKW_HOME       State directory (default: $XDG_STATE_HOME/clockw or ~/.local/state/clockw).");
    println!("                    The default log file is clockw.jsonl in this directory.");
    println!();
    println!("{}", domain::command::COMMAND_HELP);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.help {
        print_help();
        return Ok(0);
    }
    run_widget(&config)
}

fn run_widget(config: &Config) -> Result<i32, Error> {
    let env = StdEnvResolver;
    let mut app = wire_clockw(config, &env);

    // 起動時の指定が不正なら tick を始める前に終了する
    for command in startup_commands(config, env.default_theme()) {
        app.widget.dispatch(command)?;
    }

    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "clockw started")
            .layer("cli")
            .kind("lifecycle")
            .field("theme", app.widget.theme().name())
            .field("alarms", app.widget.alarms().len())
            .field("interval_ms", config.interval_ms),
    );

    let (tx, rx) = mpsc::channel();
    let interrupt_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(HostEvent::Interrupt);
    })
    .map_err(|e| Error::system(format!("failed to install Ctrl-C handler: {}", e)))?;
    host::spawn_stdin_reader(tx);

    let options = HostOptions {
        interval: Duration::from_millis(config.interval_ms),
        max_ticks: config.ticks,
    };
    let ticks = host::run_loop(&mut app.widget, &rx, &options, app.logger.as_ref());

    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "clockw stopped")
            .layer("cli")
            .kind("lifecycle")
            .field("ticks", ticks)
            .field(
                "stopwatch",
                serde_json::to_value(app.widget.stopwatch().state())
                    .unwrap_or(serde_json::Value::Null),
            ),
    );
    Ok(0)
}
