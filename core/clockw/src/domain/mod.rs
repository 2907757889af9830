//! ドメイン型と純粋なロジック（時計表示・ストップウォッチ・アラーム・テーマ・入力コマンド）
//!
//! ここには I/O を置かない。時刻は引数で受け取り、副作用は usecase が ports 経由で起こす。

pub mod alarm;
pub mod clock_face;
pub mod command;
pub mod stopwatch;
pub mod theme;

pub use alarm::{Alarm, AlarmRegistry};
pub use clock_face::ClockDisplay;
pub use command::WidgetCommand;
pub use stopwatch::{StopwatchCounter, StopwatchState};
pub use theme::{Theme, ThemeChoice, ThemeSelector};
