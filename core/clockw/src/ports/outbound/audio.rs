//! 音声トリガ Outbound ポート

/// アラーム発火時に鳴らす音
///
/// 再生の完了は待たない（fire-and-forget）。
pub trait AudioTrigger: Send + Sync {
    fn play(&self);
}
