//! 国選択ダイアログ
//!
//! 検索付きのチェックリストで国を選び、確定時にチェック済みの国をホストへ返す。
//!
//! - `model`: Props と画面状態
//! - `update`: Msg/update とホストへのコールバック
//! - `view`: 描画
//! - `filter`: ローカル検索

mod filter;
mod model;
mod update;
mod view;

pub use filter::local_search;
pub use model::{Model, Props};
pub use update::{key_to_msg, update, Callbacks, DialogHandler, Msg};
pub use view::view;

use crate::tui::dialog::TerminalSession;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;

/// ダイアログを表示し、閉じるまでイベントを処理する
///
/// `props.open` が false なら何もせずに戻る。
pub fn run<H>(props: &Props, handler: &mut H) -> io::Result<()>
where
    H: DialogHandler + ?Sized,
{
    let mut model = Model::new();
    model.sync_props(props);
    if !model.is_open() {
        return Ok(());
    }

    let mut session = TerminalSession::enter()?;

    while model.is_open() {
        session.draw(|f| view(f, &model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(msg) = key_to_msg(&model, key) {
                update(&mut model, msg, handler);
            }
        }
    }

    Ok(())
}
