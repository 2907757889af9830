//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由でのみ「現在時刻」を取得する。ウィジェットの唯一の外部依存。

use crate::domain::Timestamp;

/// 現在の壁時計時刻を返す抽象
///
/// 実装は `common::adapter::LocalTimeSource` やテスト用の `FixedTimeSource` など。
pub trait TimeSource: Send + Sync {
    /// 現在のローカル時刻のスナップショットを返す
    fn now(&self) -> Timestamp;
}
