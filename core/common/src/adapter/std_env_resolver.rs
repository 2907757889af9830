//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "clockw.jsonl";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 変数参照を注入して状態ディレクトリを解決する（テストでは env を汚さない）
fn home_dir_with(get: impl Fn(&str) -> Option<String>) -> Result<PathBuf, Error> {
    if let Some(home) = get("CLOCKW_HOME") {
        return Ok(PathBuf::from(home));
    }

    let state_base = get("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| get("HOME").map(|h| PathBuf::from(h).join(".local").join("state")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(state_base.join("clockw"))
}

fn log_file_path_with(get: impl Fn(&str) -> Option<String>) -> Result<PathBuf, Error> {
    if let Some(path) = get("CLOCKW_LOG_FILE") {
        return Ok(PathBuf::from(path));
    }
    Ok(home_dir_with(get)?.join(LOG_FILE_NAME))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
        home_dir_with(lookup)
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        log_file_path_with(lookup)
    }

    fn default_theme(&self) -> Option<String> {
        lookup("CLOCKW_THEME")
    }
}
