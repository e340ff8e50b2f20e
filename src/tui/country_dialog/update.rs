//! 国選択ダイアログの Msg/update 定義
//!
//! キー入力をメッセージに変換し、メッセージに応じて状態を更新する。
//! 確定・キャンセルはホストのコールバック（`DialogHandler`）へ通知する。

use super::model::{Focus, Model};
use crate::country::{ChangeEvent, Country};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// DialogHandler（ホストへの通知）
// ============================================================================

/// ダイアログの結果を受け取るホスト側のコールバック
pub trait DialogHandler {
    /// 確定時にチェック済みの国を受け取る
    fn on_confirm(&mut self, countries: Vec<Country>);

    /// 閉じるときに呼ばれる（確定時は `on_confirm` の後）
    fn on_close(&mut self);
}

/// クロージャの組を `DialogHandler` として扱う
pub struct Callbacks<C, X> {
    on_confirm: C,
    on_close: X,
}

impl<C, X> Callbacks<C, X>
where
    C: FnMut(Vec<Country>),
    X: FnMut(),
{
    pub fn new(on_confirm: C, on_close: X) -> Self {
        Self {
            on_confirm,
            on_close,
        }
    }
}

impl<C, X> DialogHandler for Callbacks<C, X>
where
    C: FnMut(Vec<Country>),
    X: FnMut(),
{
    fn on_confirm(&mut self, countries: Vec<Country>) {
        (self.on_confirm)(countries)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// 国選択ダイアログへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 行のチェック変更
    Change(ChangeEvent),
    /// カーソル行のチェックを反転
    ToggleSelected,
    /// カーソルを上へ
    SelectPrev,
    /// カーソルを下へ
    SelectNext,
    /// 検索文字入力
    QueryInput(char),
    /// 検索文字削除
    QueryBackspace,
    /// 検索クリア
    QueryClear,
    /// 検索欄にフォーカス
    FocusSearch,
    /// リストにフォーカス
    FocusList,
    /// 確定
    Confirm,
    /// キャンセル
    Cancel,
}

/// キー入力をメッセージに変換
///
/// Ctrl+S はフォーカスや表示行に関係なく確定、Ctrl+C はキャンセル。
/// それ以外の Ctrl / Alt 付き文字キーは無視する。
pub fn key_to_msg(model: &Model, key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Msg::Confirm),
        KeyCode::Char('c') if ctrl => return Some(Msg::Cancel),
        KeyCode::Char(_) if ctrl || alt => return None,
        _ => {}
    }

    match model.focus() {
        Focus::Search => match key.code {
            KeyCode::Esc if !model.query().is_empty() => Some(Msg::QueryClear),
            KeyCode::Esc => Some(Msg::Cancel),
            // 表示行が無ければリストへ移れないので、そのまま確定する
            KeyCode::Enter if model.current().is_none() => Some(Msg::Confirm),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => Some(Msg::FocusList),
            KeyCode::Backspace => Some(Msg::QueryBackspace),
            KeyCode::Char(c) => Some(Msg::QueryInput(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Msg::Cancel),
            KeyCode::Enter => Some(Msg::Confirm),
            KeyCode::Char(' ') => Some(Msg::ToggleSelected),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectNext),
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab => Some(Msg::FocusSearch),
            _ => None,
        },
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
///
/// 閉じた状態のモデルへのメッセージは無視する。
pub fn update<H>(model: &mut Model, msg: Msg, handler: &mut H)
where
    H: DialogHandler + ?Sized,
{
    if !model.is_open() {
        return;
    }

    match msg {
        Msg::Change(event) => {
            model.apply_change(&event);
        }
        Msg::ToggleSelected => {
            let event = model
                .current()
                .map(|c| ChangeEvent::new(c.code(), !c.checked));
            if let Some(event) = event {
                update(model, Msg::Change(event), handler);
            }
        }
        Msg::SelectPrev => {
            // 先頭行からさらに上へ移動したら検索欄へ戻る
            if !model.select_prev() {
                model.set_focus(Focus::Search);
            }
        }
        Msg::SelectNext => {
            model.select_next();
        }
        Msg::QueryInput(c) => {
            let mut query = model.query().to_string();
            query.push(c);
            model.set_query(query);
        }
        Msg::QueryBackspace => {
            let mut query = model.query().to_string();
            query.pop();
            model.set_query(query);
        }
        Msg::QueryClear => {
            model.set_query(String::new());
        }
        Msg::FocusSearch => {
            model.set_focus(Focus::Search);
        }
        Msg::FocusList => {
            if model.current().is_some() {
                model.set_focus(Focus::List);
            }
        }
        Msg::Confirm => {
            let selection = model.selection();
            tracing::debug!(count = selection.len(), "country selection confirmed");
            handler.on_confirm(selection);
            close(model, handler);
        }
        Msg::Cancel => {
            tracing::debug!("country selection cancelled");
            close(model, handler);
        }
    }
}

/// ホストへ通知してから状態をリセット
fn close<H>(model: &mut Model, handler: &mut H)
where
    H: DialogHandler + ?Sized,
{
    handler.on_close();
    model.reset();
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
