//! エラーハンドリング
//!
//! ワークスペース共通のエラー型。終了コードは sysexits.h に合わせる。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// CLI の引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 入力値の検証エラー（アラーム時刻・テーマ名・コマンドなど）。状態は変更しない
    #[error("{0}")]
    Validation(String),

    /// 添字が範囲外（削除対象なし）
    #[error("index {index} is out of range (have {len})")]
    Bounds { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("environment error: {0}")]
    Env(String),

    #[error("system error: {0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// 入力検証エラー
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn bounds(index: usize, len: usize) -> Self {
        Error::Bounds { index, len }
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// ユーザー入力起因で、再入力を促せば回復できるエラーか
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Bounds { .. })
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::Validation(_) => 64,
            Error::Bounds { .. } => 65,
            Error::Io(_) => 74,
            Error::Json(_) | Error::Env(_) | Error::System(_) => 70,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
