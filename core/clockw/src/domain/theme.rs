//! テーマ選択（表示専用、常に 1 つが有効）

use common::error::Error;
use std::fmt;
use std::str::FromStr;

/// 選択可能なテーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Ocean,
    Sunset,
}

impl Theme {
    /// 表示順（テーマボタンの並び）
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Ocean, Theme::Sunset];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
        }
    }

    /// スタイルクラス名（例: "theme-dark"）
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
                Error::validation(format!(
                    "unknown theme '{}' (choose one of: {})",
                    s.trim(),
                    names.join(", ")
                ))
            })
    }
}

/// テーマボタン 1 つ分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChoice {
    pub theme: Theme,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeSelector {
    current: Theme,
}

impl ThemeSelector {
    /// 既定は dark
    pub fn new() -> Self {
        Self::default()
    }

    /// 名前でテーマを選ぶ。不正な名前は Validation エラーで、現在のテーマは変わらない。
    pub fn select(&mut self, name: &str) -> Result<Theme, Error> {
        let theme = name.parse::<Theme>()?;
        self.current = theme;
        Ok(theme)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn choices(&self) -> Vec<ThemeChoice> {
        Theme::ALL
            .into_iter()
            .map(|theme| ThemeChoice {
                theme,
                active: theme == self.current,
            })
            .collect()
    }
}
