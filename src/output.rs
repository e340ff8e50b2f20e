//! 国一覧の出力
//!
//! テーブル / JSON / コードのみ の3形式で出力する。

use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::Result;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Simple,
}

impl OutputFormat {
    /// `--json` / `--simple` フラグから形式を決める
    pub fn from_flags(json: bool, simple: bool) -> Self {
        match (json, simple) {
            (true, _) => OutputFormat::Json,
            (_, true) => OutputFormat::Simple,
            _ => OutputFormat::Table,
        }
    }
}

/// 出力できる国の行
pub trait CountryRow: Serialize {
    fn code(&self) -> &str;
    fn name(&self) -> &str;
    /// チェック状態（持たない場合は None）
    fn checked(&self) -> Option<bool> {
        None
    }
}

impl CountryRow for crate::country::Country {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.country
    }
}

impl CountryRow for crate::country::CountryWithState {
    fn code(&self) -> &str {
        self.code()
    }

    fn name(&self) -> &str {
        self.display_name()
    }

    fn checked(&self) -> Option<bool> {
        Some(self.checked)
    }
}

/// 指定形式で文字列化
pub fn render<T: CountryRow>(rows: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Simple => Ok(render_simple(rows)),
        OutputFormat::Table => Ok(render_table(rows)),
    }
}

/// コードのみを1行ずつ
pub fn render_simple<T: CountryRow>(rows: &[T]) -> String {
    rows.iter()
        .map(|r| r.code())
        .collect::<Vec<_>>()
        .join("\n")
}

/// テーブル形式
pub fn render_table<T: CountryRow>(rows: &[T]) -> String {
    let with_state = rows.iter().any(|r| r.checked().is_some());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    if with_state {
        table.set_header(vec!["Code", "Country", "Selected"]);
    } else {
        table.set_header(vec!["Code", "Country"]);
    }

    for row in rows {
        let mut cells = vec![row.code().to_string(), row.name().to_string()];
        if let Some(checked) = row.checked() {
            cells.push(if checked { "✓" } else { "" }.to_string());
        }
        table.add_row(cells);
    }

    table.to_string()
}

/// 選択結果のサマリ
pub struct SelectionSummary {
    pub prefix: String,
    pub message: String,
}

impl SelectionSummary {
    pub fn format(selected: usize, total: usize) -> Self {
        if selected > 0 {
            Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} country(ies) selected", selected.green(), total),
            }
        } else {
            Self {
                prefix: "•".yellow().to_string(),
                message: "No countries selected".to_string(),
            }
        }
    }
}

impl std::fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
