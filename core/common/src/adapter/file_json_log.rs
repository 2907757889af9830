//! ファイルへ JSONL で追記する Log 実装
//!
//! ログの出力先はファイルのみ。画面表示やエラー時の stderr とは別。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io_msg(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let mut w = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_msg(format!("Failed to open '{}': {}", self.path.display(), e)))?;
        let line = serde_json::to_string(record)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用・ログ出力先なし）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
