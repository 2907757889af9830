//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase はこのモジュールの実装を直接使わず、ports の trait 経由で触れる。
//! 標準実装（Local* / Std* / FileJsonLog）やテスト用の固定実装を wiring で注入する。

pub mod file_json_log;
pub mod fixed_time_source;
pub mod local_time_source;
pub mod stderr_log;
pub mod std_env_resolver;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use fixed_time_source::FixedTimeSource;
pub use local_time_source::LocalTimeSource;
pub use stderr_log::StderrLog;
pub use std_env_resolver::StdEnvResolver;
