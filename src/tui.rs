//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した国選択ダイアログを提供する。

mod country_dialog;
mod dialog;

pub use country_dialog::{local_search, run as run_country_dialog, Callbacks, Props};
