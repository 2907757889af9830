//! 人間向けログ（LogRecord → stderr へ 1 行で出力）
//!
//! --verbose 指定時に FileJsonLog の代わりに使う。fields は key=value で要点のみ並べる。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELD_VALUE_MAX: usize = 80;

/// LogRecord を 1 行に整形する
pub fn format_record(rec: &LogRecord) -> String {
    let mut line = format!("[clockw] {}", rec.level.as_str());
    match (&rec.layer, &rec.kind) {
        (Some(layer), Some(kind)) => line.push_str(&format!(" {}/{}", layer, kind)),
        (Some(layer), None) => line.push_str(&format!(" {}", layer)),
        (None, Some(kind)) => line.push_str(&format!(" {}", kind)),
        (None, None) => {}
    }
    line.push_str(": ");
    line.push_str(&rec.message);
    if let Some(fields) = &rec.fields {
        for (k, v) in fields {
            let value = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let value = if value.chars().count() > FIELD_VALUE_MAX {
                let truncated: String = value.chars().take(FIELD_VALUE_MAX).collect();
                format!("{}...", truncated)
            } else {
                value
            };
            line.push_str(&format!(" {}={}", k, value));
        }
    }
    line
}

/// stderr へ整形して出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_record(record));
        Ok(())
    }
}
