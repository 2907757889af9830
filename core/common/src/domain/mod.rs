//! ドメイン型
//!
//! 時刻ソースから得た値をそのまま運ばず、検証済みの型に包んで境界を明確にする。

pub mod timestamp;

pub use timestamp::Timestamp;
