use std::path::PathBuf;

use thiserror::Error;

pub mod code;
pub mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

/// TCD統一エラー型
#[derive(Debug, Error)]
pub enum TcdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}. Expected .json, .yaml, .yml or .toml")]
    UnsupportedFormat(PathBuf),

    #[error("Country entry #{index} has no code")]
    MissingCode { index: usize },

    #[error("Duplicate country code: {0}")]
    DuplicateCode(String),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("No country catalog configured. Pass --countries or set TCD_COUNTRIES")]
    CatalogNotConfigured,
}

pub type Result<T> = std::result::Result<T, TcdError>;

impl TcdError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            TcdError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
            TcdError::Json(_) | TcdError::Yaml(_) | TcdError::Toml(_) => ErrorCode::Cfg001,
            TcdError::UnsupportedFormat(_) => ErrorCode::Cfg002,
            TcdError::CatalogNotConfigured => ErrorCode::Cfg003,
            TcdError::MissingCode { .. } => ErrorCode::Val001,
            TcdError::DuplicateCode(_) => ErrorCode::Val002,
            TcdError::UnknownCountry(_) => ErrorCode::Val003,
        }
    }
}
