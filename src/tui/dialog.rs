//! TUIダイアログの基盤
//!
//! 端末セッションの管理と、ダイアログ共通の描画部品を提供する。

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io::{self, stdout, Stdout};

/// 端末セッション
///
/// raw モードと代替スクリーンに入り、drop 時に必ず元へ戻す。
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// 端末セッションを開始
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }

    /// 1フレーム描画
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore();
    }
}

/// ターミナルを復元
fn restore() {
    let _ = terminal::disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// 画面中央のダイアログ領域を計算
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 検索バーを描画
///
/// フォーカス中は枠を強調し、入力位置にカーソルを置く。
pub fn render_search_bar(
    f: &mut Frame,
    area: Rect,
    query: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let prefix = Span::styled("/ ", Style::default().fg(Color::DarkGray));
    let text = if query.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(query)
    };

    let search = Paragraph::new(Line::from(vec![prefix.clone(), text]))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(search, area);

    if focused && area.width > 2 && area.height > 2 {
        f.set_cursor_position(search_cursor(area, prefix.width() + Span::raw(query).width()));
    }
}

/// 検索バー内のカーソル位置（右端の枠の内側に収める）
fn search_cursor(area: Rect, text_width: usize) -> (u16, u16) {
    let offset = u16::try_from(text_width).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
    (x, area.y.saturating_add(1))
}
