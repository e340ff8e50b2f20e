//! 国選択ダイアログの Model 定義
//!
//! ホストから渡される `Props` と、ダイアログ内の作業用状態を定義する。

use super::filter::local_search;
use crate::country::{checked_countries, ChangeEvent, Country, CountryWithState};

// ============================================================================
// Props（ホストからの入力）
// ============================================================================

/// ダイアログへの入力
#[derive(Debug, Clone, Default)]
pub struct Props {
    /// 表示するかどうか
    pub open: bool,
    /// 元の国一覧と初期チェック状態
    pub countries: Vec<CountryWithState>,
}

impl Props {
    /// 表示状態の Props を作成
    pub fn open(countries: Vec<CountryWithState>) -> Self {
        Self {
            open: true,
            countries,
        }
    }
}

// ============================================================================
// Focus（入力フォーカス）
// ============================================================================

/// 入力フォーカス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 検索欄
    #[default]
    Search,
    /// 国リスト
    List,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 国選択ダイアログの状態
///
/// 作業用リストは Props からのスナップショットで、表示中のみ有効。
/// 閉じると作業用リストとクエリは空に戻る。
#[derive(Debug, Default)]
pub struct Model {
    open: bool,
    /// 作業用リスト
    countries: Vec<CountryWithState>,
    /// 最後に受け取った Props の国一覧
    last_seen: Vec<CountryWithState>,
    query: String,
    focus: Focus,
    /// カーソル位置（行は国コードで識別する）
    selected_code: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Props を反映する
    ///
    /// 閉→開の遷移時、または国一覧が前回と異なる場合に作業用リストを
    /// Props のコピーで置き換える。ローカルの編集とはマージしない。
    pub fn sync_props(&mut self, props: &Props) {
        if !props.open {
            self.open = false;
            return;
        }

        let opening = !self.open;
        if opening || self.last_seen != props.countries {
            tracing::debug!(
                count = props.countries.len(),
                opening,
                "snapshot countries from props"
            );
            self.last_seen = props.countries.clone();
            self.set_countries(props.countries.clone());
        }
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 作業用リスト
    pub fn countries(&self) -> &[CountryWithState] {
        &self.countries
    }

    /// 作業用リストを置き換える
    pub fn set_countries(&mut self, countries: Vec<CountryWithState>) {
        self.countries = countries;
        self.anchor_cursor();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 検索クエリを置き換える
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.anchor_cursor();
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// クエリで絞り込んだ表示用リスト
    pub fn filtered(&self) -> Vec<&CountryWithState> {
        local_search(&self.countries, &self.query, |c| c.display_name())
    }

    /// チェック変更イベントを適用
    ///
    /// 該当コードが無い場合は何もせず `false` を返す。
    pub fn apply_change(&mut self, event: &ChangeEvent) -> bool {
        let mut updated = self.countries.clone();
        match updated.iter_mut().find(|c| c.code() == event.name) {
            Some(entry) => {
                entry.checked = event.value;
                self.countries = updated;
                true
            }
            None => {
                tracing::debug!(code = %event.name, "change for unknown country ignored");
                false
            }
        }
    }

    /// チェック済みの国（フラグなし）
    pub fn selection(&self) -> Vec<Country> {
        checked_countries(self.countries())
    }

    pub fn checked_count(&self) -> usize {
        self.countries().iter().filter(|c| c.checked).count()
    }

    pub fn selected_code(&self) -> Option<&str> {
        self.selected_code.as_deref()
    }

    /// 表示用リスト上のカーソル位置
    pub fn cursor_index(&self) -> Option<usize> {
        let code = self.selected_code()?;
        self.filtered().iter().position(|c| c.code() == code)
    }

    /// カーソル位置の国
    pub fn current(&self) -> Option<&CountryWithState> {
        let code = self.selected_code()?;
        self.countries.iter().find(|c| c.code() == code)
    }

    /// カーソルを上に移動（先頭または空なら `false`）
    pub fn select_prev(&mut self) -> bool {
        match self.cursor_index() {
            Some(i) if i > 0 => {
                let code = self.filtered().get(i - 1).map(|c| c.code().to_string());
                self.selected_code = code;
                true
            }
            _ => false,
        }
    }

    /// カーソルを下に移動（末尾または空なら `false`）
    pub fn select_next(&mut self) -> bool {
        let next = self.cursor_index().map_or(0, |i| i + 1);
        let code = self.filtered().get(next).map(|c| c.code().to_string());
        match code {
            Some(code) => {
                self.selected_code = Some(code);
                true
            }
            None => false,
        }
    }

    /// 閉じた状態へ戻す（作業用リストとクエリを空にする）
    pub fn reset(&mut self) {
        self.open = false;
        self.countries = Vec::new();
        self.query.clear();
        self.focus = Focus::Search;
        self.selected_code = None;
    }

    /// カーソルが表示用リストから外れたら先頭に付け直す
    fn anchor_cursor(&mut self) {
        let replacement = {
            let filtered = self.filtered();
            let still_visible = self
                .selected_code
                .as_deref()
                .is_some_and(|code| filtered.iter().any(|c| c.code() == code));
            (!still_visible).then(|| filtered.first().map(|c| c.code().to_string()))
        };
        if let Some(code) = replacement {
            self.selected_code = code;
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
