//! CLI 境界（引数解析と起動時コマンドへの変換）

mod args;

pub use args::{parse_args, print_completion, startup_commands, Config, ParseOutcome};
