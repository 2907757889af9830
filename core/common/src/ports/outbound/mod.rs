//! Outbound ポート: アプリが外界（時刻・ログ・環境変数）を使うための trait

pub mod env_resolver;
pub mod log;
pub mod time_source;

pub use env_resolver::EnvResolver;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use time_source::TimeSource;
