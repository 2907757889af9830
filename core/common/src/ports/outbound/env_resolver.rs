//! 環境変数解決 Outbound ポート
//!
//! ログ出力先やテーマの既定値を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 状態ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. CLOCKW_HOME（設定されていれば）
    /// 2. $XDG_STATE_HOME/clockw
    /// 3. $HOME/.local/state/clockw
    fn resolve_home_dir(&self) -> Result<PathBuf, Error>;

    /// 構造化ログ（JSONL）の出力先
    /// CLOCKW_LOG_FILE があればそれ、なければ resolve_home_dir() 直下の clockw.jsonl
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;

    /// 起動時テーマ（CLOCKW_THEME）
    fn default_theme(&self) -> Option<String>;
}
