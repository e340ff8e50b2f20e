/// カタログファイルのパスを指定する環境変数
pub const COUNTRIES_ENV: &str = "TCD_COUNTRIES";
/// ログフィルタを指定する環境変数（EnvFilter 構文）
pub const LOG_ENV: &str = "TCD_LOG";
/// ログ出力先ファイルを指定する環境変数
pub const LOG_FILE_ENV: &str = "TCD_LOG_FILE";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}
