use crate::domain::WidgetCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// tick 間隔の既定値（1 Hz）
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// 起動時テーマ（None なら CLOCKW_THEME、それも無ければ dark）
    pub theme: Option<String>,
    /// 起動時に登録するアラーム（"HH:MM"、指定順）
    pub alarms: Vec<String>,
    /// 指定回数 tick したら終了する
    pub ticks: Option<u64>,
    pub interval_ms: u64,
    /// 構造化ログの出力先（None なら CLOCKW_LOG_FILE / 既定パス）
    pub log_file: Option<String>,
    /// -v / --verbose: ログを stderr に人間向けで出す
    pub verbose: bool,
    /// -m / --mute: アラームでベルを鳴らさない
    pub mute: bool,
    /// -c / --compact: 1 フレーム 1 行で出力する
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            theme: None,
            alarms: Vec::new(),
            ticks: None,
            interval_ms: DEFAULT_INTERVAL_MS,
            log_file: None,
            verbose: false,
            mute: false,
            compact: false,
        }
    }
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("clockw")
        .about("Terminal clock with stopwatch, alarms and themes")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("theme")
                .short('t')
                .long("theme")
                .value_name("name")
                .help("Initial theme: light, dark, ocean or sunset")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("alarm")
                .short('a')
                .long("alarm")
                .value_name("HH:MM")
                .help("Add an alarm at startup (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("ticks")
                .short('n')
                .long("ticks")
                .value_name("count")
                .help("Exit after this many ticks")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("interval-ms")
                .long("interval-ms")
                .value_name("ms")
                .help("Tick interval in milliseconds (default 1000)")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .short('l')
                .long("log-file")
                .value_name("path")
                .help("Write JSONL logs to this file")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print logs to stderr instead of the log file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("mute")
                .short('m')
                .long("mute")
                .help("Do not ring the terminal bell on alarms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("compact")
                .short('c')
                .long("compact")
                .help("One line per frame instead of the full-screen face")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        theme: matches.get_one::<String>("theme").cloned(),
        alarms: matches
            .get_many::<String>("alarm")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
        ticks: matches.get_one::<u64>("ticks").copied(),
        interval_ms: matches
            .get_one::<u64>("interval-ms")
            .copied()
            .unwrap_or(DEFAULT_INTERVAL_MS),
        log_file: matches.get_one::<String>("log-file").cloned(),
        verbose: matches.get_flag("verbose"),
        mute: matches.get_flag("mute"),
        compact: matches.get_flag("compact"),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string().trim_end().to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "clockw", &mut std::io::stdout());
}

/// 起動時に適用するコマンド列（テーマ → アラームの順）
///
/// テーマは CLI 指定が環境変数より優先。
pub fn startup_commands(config: &Config, env_theme: Option<String>) -> Vec<WidgetCommand> {
    let mut commands = Vec::new();
    if let Some(theme) = config.theme.clone().or(env_theme) {
        commands.push(WidgetCommand::Theme(theme));
    }
    commands.extend(config.alarms.iter().cloned().map(WidgetCommand::AlarmAdd));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        let mut argv = vec!["clockw"];
        argv.extend_from_slice(args);
        match parse_args_from(argv)? {
            ParseOutcome::Config(c) => Ok(c),
            ParseOutcome::GenerateCompletion(_) => panic!("unexpected completion outcome"),
        }
    }

    #[test]
    fn test_config_default() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.interval_ms, 1000);
    }

    #[test]
    fn test_parse_all_flags() {
        let config = parse(&[
            "-t", "ocean", "-a", "07:00", "--alarm", "13:30", "-n", "5", "--interval-ms", "250",
            "-l", "/tmp/clockw.jsonl", "-v", "-m", "-c",
        ])
        .unwrap();
        assert_eq!(config.theme.as_deref(), Some("ocean"));
        assert_eq!(config.alarms, vec!["07:00".to_string(), "13:30".to_string()]);
        assert_eq!(config.ticks, Some(5));
        assert_eq!(config.interval_ms, 250);
        assert_eq!(config.log_file.as_deref(), Some("/tmp/clockw.jsonl"));
        assert!(config.verbose && config.mute && config.compact);
        assert!(!config.help);
    }

    #[test]
    fn test_parse_help_flag() {
        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        for args in [&["--ticks", "x"][..], &["--interval-ms", "0"][..], &["--bogus"][..]] {
            let err = parse(args).unwrap_err();
            assert!(err.is_usage(), "args {:?}", args);
        }
    }

    #[test]
    fn test_parse_generate() {
        let outcome = parse_args_from(["clockw", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_startup_commands_prefer_cli_theme() {
        let config = Config {
            theme: Some("light".to_string()),
            alarms: vec!["06:00".to_string()],
            ..Default::default()
        };
        assert_eq!(
            startup_commands(&config, Some("ocean".to_string())),
            vec![
                WidgetCommand::Theme("light".to_string()),
                WidgetCommand::AlarmAdd("06:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_startup_commands_fall_back_to_env_theme() {
        let config = Config::default();
        assert_eq!(
            startup_commands(&config, Some("sunset".to_string())),
            vec![WidgetCommand::Theme("sunset".to_string())]
        );
        assert!(startup_commands(&config, None).is_empty());
    }
}
