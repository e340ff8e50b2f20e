//! 国カタログの読み込み
//!
//! JSON / YAML / TOML のファイルから国一覧を読み込み、検証する。

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::country::{Country, CountryWithState};
use crate::env::{EnvVar, COUNTRIES_ENV};
use crate::error::{Result, TcdError};

/// カタログファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// 拡張子から形式を判定
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("toml") => Ok(CatalogFormat::Toml),
            _ => Err(TcdError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// ファイル上のエントリ（検証前）
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    code: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    checked: bool,
}

/// JSON / YAML は配列そのものか `countries` キー付きのどちらでもよい
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    List(Vec<RawEntry>),
    Wrapped { countries: Vec<RawEntry> },
}

impl RawCatalog {
    fn into_entries(self) -> Vec<RawEntry> {
        match self {
            RawCatalog::List(entries) => entries,
            RawCatalog::Wrapped { countries } => countries,
        }
    }
}

/// TOML は `[[countries]]` テーブル配列のみ
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    countries: Vec<RawEntry>,
}

/// カタログパスを解決
///
/// 優先順位: 明示的な引数 > `TCD_COUNTRIES`
pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(|| EnvVar::get(COUNTRIES_ENV).map(PathBuf::from))
        .ok_or(TcdError::CatalogNotConfigured)
}

/// ファイルからカタログを読み込む
pub fn load(path: &Path) -> Result<Vec<CountryWithState>> {
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let countries = parse(&content, format)?;
    tracing::debug!(path = %path.display(), count = countries.len(), "catalog loaded");
    Ok(countries)
}

/// 文字列からカタログを解析して検証する
pub fn parse(content: &str, format: CatalogFormat) -> Result<Vec<CountryWithState>> {
    let entries = match format {
        CatalogFormat::Json => serde_json::from_str::<RawCatalog>(content)?.into_entries(),
        CatalogFormat::Yaml => serde_yaml::from_str::<RawCatalog>(content)?.into_entries(),
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(content)?.countries,
    };
    validate(entries)
}

/// コードの存在と一意性を検証
///
/// 表示名が無い場合はコードを表示名とする。
fn validate(entries: Vec<RawEntry>) -> Result<Vec<CountryWithState>> {
    let mut seen = HashSet::new();
    let mut countries = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let code = entry.code.trim().to_string();
        if code.is_empty() {
            return Err(TcdError::MissingCode { index });
        }
        if !seen.insert(code.clone()) {
            return Err(TcdError::DuplicateCode(code));
        }

        let name = entry
            .country
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| code.clone());

        countries.push(CountryWithState::new(Country::new(code, name)).with_checked(entry.checked));
    }

    Ok(countries)
}

/// 指定コードの国をチェック済みにする
///
/// 空のコードは読み飛ばし、カタログに存在しないコードはエラー。
pub fn preselect(countries: &mut [CountryWithState], codes: &[String]) -> Result<()> {
    for code in codes.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        let entry = countries
            .iter_mut()
            .find(|c| c.code() == code)
            .ok_or_else(|| TcdError::UnknownCountry(code.to_string()))?;
        entry.checked = true;
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
