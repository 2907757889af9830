//! Ports & Adapters のポート定義
//!
//! - inbound: ホストループ（tick 源・入力面）がウィジェットを呼び出すインターフェース
//! - outbound: 描画面・音声トリガ（common の TimeSource / Log も利用）

pub mod inbound;
pub mod outbound;
