use panel_core::{preview_data_url, update, Msg, PanelState, SelectedFile};

fn file(name: &str, bytes: &[u8]) -> SelectedFile {
    SelectedFile::new(name, "image/jpeg", bytes.to_vec())
}

#[test]
fn selecting_a_file_replaces_previous_one() {
    let (state, _) = update(PanelState::new(), Msg::FileSelected(file("first.jpg", b"one")));
    let (mut state, _) = update(state, Msg::FileSelected(file("second.jpg", b"two")));

    let view = state.view();
    assert_eq!(view.selected_file_name.as_deref(), Some("second.jpg"));
    assert_eq!(
        view.before_preview,
        Some(preview_data_url(&file("second.jpg", b"two")))
    );
    assert!(state.consume_dirty());
}

#[test]
fn drop_keeps_only_the_first_file() {
    let dropped = vec![file("a.jpg", b"a"), file("b.jpg", b"b"), file("c.jpg", b"c")];

    let (state, effects) = update(PanelState::new(), Msg::FilesDropped(dropped));

    assert!(effects.is_empty());
    assert_eq!(state.selected_file(), Some(&file("a.jpg", b"a")));
    assert_eq!(
        state.view().before_preview.as_deref(),
        Some("data:image/jpeg;base64,YQ==")
    );
}

#[test]
fn drop_replaces_a_picked_file() {
    let (state, _) = update(PanelState::new(), Msg::FileSelected(file("picked.jpg", b"p")));
    let (state, _) = update(state, Msg::FilesDropped(vec![file("dropped.jpg", b"d")]));

    assert_eq!(state.view().selected_file_name.as_deref(), Some("dropped.jpg"));
}

#[test]
fn empty_drop_is_ignored() {
    let (state, _) = update(PanelState::new(), Msg::FileSelected(file("kept.jpg", b"k")));
    let mut state = state;
    state.consume_dirty();

    let (mut next, effects) = update(state, Msg::FilesDropped(Vec::new()));

    assert!(effects.is_empty());
    assert_eq!(next.view().selected_file_name.as_deref(), Some("kept.jpg"));
    assert!(!next.consume_dirty());
}
