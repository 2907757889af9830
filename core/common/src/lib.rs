//! clockw 共通ライブラリ
//!
//! 時刻ソース・構造化ログ・環境変数解決など、ウィジェット本体が外界に触れるための
//! ポートと標準アダプター、共通エラー型を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Timestamp など）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
