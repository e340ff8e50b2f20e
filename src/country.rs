//! 国データのモデル
//!
//! ダイアログが扱う国と、チェック状態付きの国を定義する。

use serde::{Deserialize, Serialize};

/// 国
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// 国コード（一意）
    pub code: String,
    /// 表示名
    pub country: String,
}

impl Country {
    pub fn new(code: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            country: country.into(),
        }
    }
}

/// チェック状態付きの国
///
/// ダイアログ内でのみ意味を持つ一時的な `checked` フラグを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryWithState {
    #[serde(flatten)]
    pub country: Country,
    #[serde(default)]
    pub checked: bool,
}

impl CountryWithState {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            checked: false,
        }
    }

    /// チェック状態を設定
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn code(&self) -> &str {
        &self.country.code
    }

    /// 表示名
    pub fn display_name(&self) -> &str {
        &self.country.country
    }

    /// チェック状態を取り除いた国を返す
    pub fn into_country(self) -> Country {
        self.country
    }
}

/// 行のチェック変更イベント
///
/// `name` は対象の国コード、`value` は新しいチェック状態。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub name: String,
    pub value: bool,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// チェック済みの国だけを、フラグを外して取り出す
pub fn checked_countries(countries: &[CountryWithState]) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| c.checked)
        .cloned()
        .map(CountryWithState::into_country)
        .collect()
}

#[cfg(test)]
#[path = "country_test.rs"]
mod tests;
