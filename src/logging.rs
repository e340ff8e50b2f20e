//! ログ初期化
//!
//! ダイアログ表示中は端末を占有するため、`TCD_LOG_FILE` が設定されていれば
//! ファイルへ、なければ stderr へ出力する。

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::env::{EnvVar, LOG_ENV, LOG_FILE_ENV};

const DEFAULT_FILTER: &str = "warn";

/// tracing サブスクライバを初期化
///
/// 二重初期化や出力先ファイルのオープン失敗は無視し、stderr にフォールバックする。
pub fn init() {
    let filter = EnvVar::get(LOG_ENV)
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let file = EnvVar::get(LOG_FILE_ENV).and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let _ = match file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
