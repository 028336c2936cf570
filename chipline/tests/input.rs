use chipline::{FilterInput, Key, Modifiers, TextEditResult};

fn press(input: &mut FilterInput, key: Key) -> TextEditResult {
    input.handle_key(key, Modifiers::new())
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_insert_at_cursor() {
    let mut input = FilterInput::new();
    press(&mut input, Key::Char('a'));
    press(&mut input, Key::Char('c'));
    press(&mut input, Key::Left);
    press(&mut input, Key::Char('b'));
    assert_eq!(input.text(), "abc");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let mut input = FilterInput::new();
    input.set("abc");
    assert_eq!(press(&mut input, Key::Backspace), TextEditResult::Changed);
    assert_eq!(input.text(), "ab");
}

#[test]
fn test_backspace_at_start_changes_nothing() {
    let mut input = FilterInput::new();
    input.set("abc");
    press(&mut input, Key::Home);
    assert_eq!(press(&mut input, Key::Backspace), TextEditResult::Handled);
    assert_eq!(input.text(), "abc");
}

#[test]
fn test_delete_removes_at_cursor() {
    let mut input = FilterInput::new();
    input.set("abc");
    press(&mut input, Key::Home);
    assert_eq!(press(&mut input, Key::Delete), TextEditResult::Changed);
    assert_eq!(input.text(), "bc");

    press(&mut input, Key::End);
    assert_eq!(press(&mut input, Key::Delete), TextEditResult::Handled);
    assert_eq!(input.text(), "bc");
}

#[test]
fn test_multibyte_text_edits_on_char_boundaries() {
    let mut input = FilterInput::new();
    for c in "héllo".chars() {
        press(&mut input, Key::Char(c));
    }
    assert_eq!(input.text(), "héllo");

    press(&mut input, Key::Backspace);
    press(&mut input, Key::Backspace);
    press(&mut input, Key::Backspace);
    assert_eq!(input.text(), "hé");

    press(&mut input, Key::Left);
    press(&mut input, Key::Delete);
    assert_eq!(input.text(), "h");
}

// ============================================================================
// Cursor movement
// ============================================================================

#[test]
fn test_cursor_clamps_to_text_bounds() {
    let mut input = FilterInput::new();
    input.set("ab");

    press(&mut input, Key::Right);
    assert_eq!(input.cursor(), 2);

    press(&mut input, Key::Home);
    press(&mut input, Key::Left);
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_enter_submits_without_editing() {
    let mut input = FilterInput::new();
    input.set("abc");
    assert_eq!(press(&mut input, Key::Enter), TextEditResult::Submitted);
    assert_eq!(input.text(), "abc");
}

#[test]
fn test_unmatched_keys_are_ignored() {
    let mut input = FilterInput::new();
    assert_eq!(press(&mut input, Key::Up), TextEditResult::Ignored);
    assert_eq!(press(&mut input, Key::Tab), TextEditResult::Ignored);
    assert_eq!(
        input.handle_key(Key::Char('q'), Modifiers::ctrl()),
        TextEditResult::Ignored
    );
}
