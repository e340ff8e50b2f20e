use super::*;
use crate::country::CountryWithState;
use crate::tui::country_dialog::model::Props;

/// ホストへの通知を記録するテスト用ハンドラ
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

#[derive(Debug, PartialEq, Eq)]
enum Call {
    Confirm(Vec<Country>),
    Close,
}

impl DialogHandler for Recorder {
    fn on_confirm(&mut self, countries: Vec<Country>) {
        self.calls.push(Call::Confirm(countries));
    }

    fn on_close(&mut self) {
        self.calls.push(Call::Close);
    }
}

fn make_country(code: &str, name: &str, checked: bool) -> CountryWithState {
    CountryWithState::new(Country::new(code, name)).with_checked(checked)
}

fn sample() -> Vec<CountryWithState> {
    vec![
        make_country("US", "United States", true),
        make_country("FR", "France", false),
    ]
}

fn open_model() -> Model {
    let mut model = Model::new();
    model.sync_props(&Props::open(sample()));
    model
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn chord(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// キー列を順に流し込む
fn feed(model: &mut Model, recorder: &mut Recorder, keys: &[KeyEvent]) {
    for key in keys {
        if let Some(msg) = key_to_msg(model, *key) {
            update(model, msg, recorder);
        }
    }
}

fn list_focused_model() -> Model {
    let mut model = open_model();
    model.set_focus(Focus::List);
    model
}

// ============================================================================
// 確定・キャンセル
// ============================================================================

#[test]
fn confirm_emits_checked_subset_then_closes() {
    let mut model = open_model();
    let mut recorder = Recorder::default();

    update(&mut model, Msg::Confirm, &mut recorder);

    assert_eq!(
        recorder.calls,
        vec![
            Call::Confirm(vec![Country::new("US", "United States")]),
            Call::Close,
        ]
    );
    assert!(!model.is_open());
    assert!(model.countries().is_empty());
    assert_eq!(model.query(), "");
}

#[test]
fn confirm_with_nothing_checked_emits_empty() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    update(
        &mut model,
        Msg::Change(ChangeEvent::new("US", false)),
        &mut recorder,
    );

    update(&mut model, Msg::Confirm, &mut recorder);

    assert_eq!(recorder.calls, vec![Call::Confirm(vec![]), Call::Close]);
}

#[test]
fn confirm_includes_rows_hidden_by_query() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::QueryInput('f'), &mut recorder);
    update(&mut model, Msg::Confirm, &mut recorder);

    assert_eq!(
        recorder.calls[0],
        Call::Confirm(vec![Country::new("US", "United States")])
    );
}

#[test]
fn cancel_closes_without_emitting() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::QueryInput('u'), &mut recorder);

    update(&mut model, Msg::Cancel, &mut recorder);

    assert_eq!(recorder.calls, vec![Call::Close]);
    assert!(!model.is_open());
    assert!(model.countries().is_empty());
    assert_eq!(model.query(), "");
}

#[test]
fn messages_after_close_are_ignored() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::Cancel, &mut recorder);

    update(&mut model, Msg::Confirm, &mut recorder);

    assert_eq!(recorder.calls, vec![Call::Close]);
}

#[test]
fn callbacks_adapter_forwards_to_closures() {
    let mut model = open_model();
    let mut confirmed = None;
    let mut closed = 0;
    {
        let mut handler = Callbacks::new(|c| confirmed = Some(c), || closed += 1);
        update(&mut model, Msg::Confirm, &mut handler);
    }
    assert_eq!(confirmed, Some(vec![Country::new("US", "United States")]));
    assert_eq!(closed, 1);
}

// ============================================================================
// チェック変更
// ============================================================================

#[test]
fn toggle_selected_flips_cursor_row() {
    let mut model = list_focused_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::SelectNext, &mut recorder);

    update(&mut model, Msg::ToggleSelected, &mut recorder);

    assert!(model.countries()[1].checked);
    assert!(model.countries()[0].checked);
    assert!(recorder.calls.is_empty());
}

#[test]
fn toggle_selected_twice_restores_state() {
    let mut model = list_focused_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::ToggleSelected, &mut recorder);
    update(&mut model, Msg::ToggleSelected, &mut recorder);
    assert!(model.countries()[0].checked);
}

#[test]
fn toggle_with_no_visible_rows_is_noop() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    model.set_query("zzz");

    update(&mut model, Msg::ToggleSelected, &mut recorder);

    assert_eq!(model.countries(), sample().as_slice());
}

#[test]
fn change_for_unknown_code_is_noop() {
    let mut model = open_model();
    let mut recorder = Recorder::default();

    update(
        &mut model,
        Msg::Change(ChangeEvent::new("XX", true)),
        &mut recorder,
    );

    assert_eq!(model.countries(), sample().as_slice());
    assert!(model.is_open());
}

// ============================================================================
// 検索とフォーカス
// ============================================================================

#[test]
fn query_input_and_backspace() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::QueryInput('F'), &mut recorder);
    update(&mut model, Msg::QueryInput('r'), &mut recorder);
    assert_eq!(model.query(), "Fr");
    assert_eq!(model.filtered().len(), 1);

    update(&mut model, Msg::QueryBackspace, &mut recorder);
    assert_eq!(model.query(), "F");

    update(&mut model, Msg::QueryClear, &mut recorder);
    assert_eq!(model.query(), "");
    assert_eq!(model.filtered().len(), 2);
}

#[test]
fn select_prev_at_top_moves_focus_to_search() {
    let mut model = list_focused_model();
    let mut recorder = Recorder::default();
    update(&mut model, Msg::SelectPrev, &mut recorder);
    assert_eq!(model.focus(), Focus::Search);
}

#[test]
fn focus_list_requires_visible_rows() {
    let mut model = open_model();
    let mut recorder = Recorder::default();
    model.set_query("zzz");

    update(&mut model, Msg::FocusList, &mut recorder);
    assert_eq!(model.focus(), Focus::Search);

    model.set_query("");
    update(&mut model, Msg::FocusList, &mut recorder);
    assert_eq!(model.focus(), Focus::List);
}

// ============================================================================
// キー変換
// ============================================================================

#[test]
fn search_focus_routes_chars_to_query() {
    let model = open_model();
    assert_eq!(key_to_msg(&model, press(KeyCode::Char('q'))), Some(Msg::QueryInput('q')));
    assert_eq!(key_to_msg(&model, press(KeyCode::Char(' '))), Some(Msg::QueryInput(' ')));
    assert_eq!(key_to_msg(&model, press(KeyCode::Backspace)), Some(Msg::QueryBackspace));
    assert_eq!(key_to_msg(&model, press(KeyCode::Down)), Some(Msg::FocusList));
    assert_eq!(key_to_msg(&model, press(KeyCode::Enter)), Some(Msg::FocusList));
}

#[test]
fn search_focus_esc_clears_then_cancels() {
    let mut model = open_model();
    assert_eq!(key_to_msg(&model, press(KeyCode::Esc)), Some(Msg::Cancel));

    model.set_query("fr");
    assert_eq!(key_to_msg(&model, press(KeyCode::Esc)), Some(Msg::QueryClear));
}

#[test]
fn list_focus_key_bindings() {
    let model = list_focused_model();
    assert_eq!(key_to_msg(&model, press(KeyCode::Char(' '))), Some(Msg::ToggleSelected));
    assert_eq!(key_to_msg(&model, press(KeyCode::Enter)), Some(Msg::Confirm));
    assert_eq!(key_to_msg(&model, press(KeyCode::Esc)), Some(Msg::Cancel));
    assert_eq!(key_to_msg(&model, press(KeyCode::Char('q'))), Some(Msg::Cancel));
    assert_eq!(key_to_msg(&model, press(KeyCode::Char('j'))), Some(Msg::SelectNext));
    assert_eq!(key_to_msg(&model, press(KeyCode::Up)), Some(Msg::SelectPrev));
    assert_eq!(key_to_msg(&model, press(KeyCode::Char('/'))), Some(Msg::FocusSearch));
    assert_eq!(key_to_msg(&model, press(KeyCode::Char('x'))), None);
}

#[test]
fn search_focus_enter_confirms_when_no_rows_visible() {
    let mut model = open_model();
    model.set_query("zzz");
    assert_eq!(key_to_msg(&model, press(KeyCode::Enter)), Some(Msg::Confirm));
}

#[test]
fn ctrl_s_confirms_from_any_focus() {
    let model = open_model();
    let ctrl_s = chord(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(key_to_msg(&model, ctrl_s), Some(Msg::Confirm));

    let model = list_focused_model();
    assert_eq!(key_to_msg(&model, ctrl_s), Some(Msg::Confirm));
}

#[test]
fn ctrl_c_cancels() {
    let model = list_focused_model();
    let ctrl_c = chord(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(key_to_msg(&model, ctrl_c), Some(Msg::Cancel));
}

#[test]
fn modifier_chords_do_not_reach_query() {
    let model = open_model();
    assert_eq!(
        key_to_msg(&model, chord(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        None
    );
    assert_eq!(
        key_to_msg(&model, chord(KeyCode::Char('b'), KeyModifiers::ALT)),
        None
    );
    assert_eq!(
        key_to_msg(&model, chord(KeyCode::Char('F'), KeyModifiers::SHIFT)),
        Some(Msg::QueryInput('F'))
    );
}

// ============================================================================
// 表示行が無い状態からの確定
// ============================================================================

#[test]
fn enter_confirms_empty_catalog() {
    let mut model = Model::new();
    model.sync_props(&Props::open(vec![]));
    let mut recorder = Recorder::default();

    feed(&mut model, &mut recorder, &[press(KeyCode::Enter)]);

    assert_eq!(recorder.calls, vec![Call::Confirm(vec![]), Call::Close]);
    assert!(!model.is_open());
}

#[test]
fn enter_confirms_hidden_checked_rows_when_query_matches_nothing() {
    let mut model = open_model();
    let mut recorder = Recorder::default();

    feed(
        &mut model,
        &mut recorder,
        &[press(KeyCode::Char('z')), press(KeyCode::Enter)],
    );

    assert_eq!(
        recorder.calls,
        vec![
            Call::Confirm(vec![Country::new("US", "United States")]),
            Call::Close,
        ]
    );
}

#[test]
fn ctrl_s_confirms_from_search_with_visible_rows() {
    let mut model = open_model();
    let mut recorder = Recorder::default();

    feed(
        &mut model,
        &mut recorder,
        &[
            press(KeyCode::Char('f')),
            chord(KeyCode::Char('s'), KeyModifiers::CONTROL),
        ],
    );

    assert_eq!(
        recorder.calls[0],
        Call::Confirm(vec![Country::new("US", "United States")])
    );
    assert_eq!(model.query(), "");
}
