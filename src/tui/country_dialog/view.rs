//! 国選択ダイアログの view 定義

use super::model::{Focus, Model};
use crate::country::CountryWithState;
use crate::tui::dialog::{centered_rect, render_search_bar};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 22;

/// 国の1行を作成
pub fn country_row(entry: &CountryWithState) -> ListItem<'_> {
    let checkbox = if entry.checked { "[x]" } else { "[ ]" };
    let checkbox_style = if entry.checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::raw(entry.display_name()),
        Span::styled(
            format!("  {}", entry.code()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, f.area());
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Choose countries ")
        .title_bottom(Line::from(" esc: close ").right_aligned())
        .borders(Borders::ALL);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索バー
            Constraint::Min(1),    // 国リスト
            Constraint::Length(1), // アクション
            Constraint::Length(1), // ヘルプ
        ])
        .split(inner);

    render_search_bar(
        f,
        chunks[0],
        model.query(),
        "Country",
        model.focus() == Focus::Search,
    );
    render_list(f, chunks[1], model);
    render_actions(f, chunks[2], model);

    let help_text = match model.focus() {
        Focus::Search if model.current().is_none() => " type search  enter/^s select  esc clear/close",
        Focus::Search => " type search  ↓/enter list  ^s select  esc clear/close",
        Focus::List => " ↑↓ move  space toggle  enter/^s select  / search  esc close",
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_list(f: &mut Frame, area: Rect, model: &Model) {
    let filtered = model.filtered();
    if filtered.is_empty() {
        let empty = Paragraph::new(" No countries found").style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = filtered.into_iter().map(country_row).collect();

    let highlight = if model.focus() == Focus::List {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(model.cursor_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_actions(f: &mut Frame, area: Rect, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(area);

    let count = Paragraph::new(format!(" {} selected", model.checked_count()));
    f.render_widget(count, chunks[0]);

    let select = Paragraph::new("[ Select ]")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);
    f.render_widget(select, chunks[1]);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
