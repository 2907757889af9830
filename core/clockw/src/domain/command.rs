//! 入力行のコマンド（Command Pattern）
//!
//! 入力面から届く 1 行を enum に落とし、usecase の dispatch で処理する。

use common::error::Error;

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// ストップウォッチ開始（動作中なら何もしない）
    Start,
    /// ストップウォッチ停止（停止中なら何もしない）
    Stop,
    /// 開始/停止ボタン
    Toggle,
    /// ストップウォッチを 0 に戻す
    Reset,
    /// アラーム追加（alarm add HH:MM / set HH:MM）
    AlarmAdd(String),
    /// アラーム削除（alarm rm <index> / delete <index>）
    AlarmRemove(usize),
    /// アラーム一覧
    AlarmList,
    /// テーマ選択（theme <name>）
    Theme(String),
    Help,
    Quit,
}

impl WidgetCommand {
    /// 1 行を解析する。空行・未知のコマンド・引数不足は Validation エラー。
    pub fn parse(line: &str) -> Result<Self, Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = match words.split_first() {
            Some((name, args)) => (name.to_ascii_lowercase(), args),
            None => return Err(Error::validation("empty command")),
        };

        match (name.as_str(), args) {
            ("start", []) => Ok(WidgetCommand::Start),
            ("stop", []) => Ok(WidgetCommand::Stop),
            ("toggle", []) => Ok(WidgetCommand::Toggle),
            ("reset", []) => Ok(WidgetCommand::Reset),
            ("set", [time]) => Ok(WidgetCommand::AlarmAdd(time.to_string())),
            ("delete", [index]) => parse_index(index).map(WidgetCommand::AlarmRemove),
            ("alarm" | "alarms", rest) => parse_alarm(rest),
            ("theme", [theme]) => Ok(WidgetCommand::Theme(theme.to_string())),
            ("help" | "?", []) => Ok(WidgetCommand::Help),
            ("quit" | "exit" | "q", []) => Ok(WidgetCommand::Quit),
            _ => Err(Error::validation(format!(
                "unrecognized command '{}' (type 'help' for a list)",
                line.trim()
            ))),
        }
    }
}

fn parse_alarm(args: &[&str]) -> Result<WidgetCommand, Error> {
    match args {
        [] | ["list"] | ["ls"] => Ok(WidgetCommand::AlarmList),
        ["add", time] => Ok(WidgetCommand::AlarmAdd(time.to_string())),
        ["rm" | "remove" | "delete", index] => parse_index(index).map(WidgetCommand::AlarmRemove),
        _ => Err(Error::validation(
            "usage: alarm add HH:MM | alarm rm <index> | alarm list",
        )),
    }
}

fn parse_index(s: &str) -> Result<usize, Error> {
    s.parse::<usize>()
        .map_err(|_| Error::validation(format!("invalid alarm index '{}'", s)))
}

/// help コマンドで表示する一覧
pub const COMMAND_HELP: &str = "\
Commands:
  start | stop | toggle     Start or stop the stopwatch.
  reset                     Stop the stopwatch and clear it to 00:00:00.
  alarm add HH:MM           Add an alarm (24-hour time). Alias: set HH:MM
  alarm rm <index>          Delete the alarm at <index> (0-based). Alias: delete <index>
  alarm list                List alarms.
  theme <name>              Switch theme (light, dark, ocean, sunset).
  help                      Show this list.
  quit                      Exit.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stopwatch_commands() {
        assert_eq!(WidgetCommand::parse("start").unwrap(), WidgetCommand::Start);
        assert_eq!(WidgetCommand::parse("STOP").unwrap(), WidgetCommand::Stop);
        assert_eq!(WidgetCommand::parse(" toggle ").unwrap(), WidgetCommand::Toggle);
        assert_eq!(WidgetCommand::parse("reset").unwrap(), WidgetCommand::Reset);
    }

    #[test]
    fn test_parse_alarm_commands() {
        assert_eq!(
            WidgetCommand::parse("alarm add 07:30").unwrap(),
            WidgetCommand::AlarmAdd("07:30".to_string())
        );
        assert_eq!(
            WidgetCommand::parse("set 23:00").unwrap(),
            WidgetCommand::AlarmAdd("23:00".to_string())
        );
        assert_eq!(WidgetCommand::parse("alarm rm 2").unwrap(), WidgetCommand::AlarmRemove(2));
        assert_eq!(WidgetCommand::parse("delete 0").unwrap(), WidgetCommand::AlarmRemove(0));
        assert_eq!(WidgetCommand::parse("alarm list").unwrap(), WidgetCommand::AlarmList);
        assert_eq!(WidgetCommand::parse("alarms").unwrap(), WidgetCommand::AlarmList);
    }

    #[test]
    fn test_parse_alarm_add_keeps_raw_time() {
        // 時刻の検証は AlarmRegistry::add が行う
        assert_eq!(
            WidgetCommand::parse("alarm add 25:99").unwrap(),
            WidgetCommand::AlarmAdd("25:99".to_string())
        );
    }

    #[test]
    fn test_parse_theme_help_quit() {
        assert_eq!(
            WidgetCommand::parse("theme light").unwrap(),
            WidgetCommand::Theme("light".to_string())
        );
        assert_eq!(WidgetCommand::parse("help").unwrap(), WidgetCommand::Help);
        assert_eq!(WidgetCommand::parse("q").unwrap(), WidgetCommand::Quit);
        assert_eq!(WidgetCommand::parse("exit").unwrap(), WidgetCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "   ", "jump", "start now", "alarm add", "alarm rm x", "alarm rm -1", "theme", "alarm snooze 1"] {
            let err = WidgetCommand::parse(bad).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "input {:?}", bad);
        }
    }
}
