//! End-to-end comment lifecycle over the mock host.

use anotar_core::{Fader, Rgb, VisualTree};
use anotar_test::{run_fade_to_completion, MockTransport, MockTree};
use anotar_widgets::{CommentEditor, FieldState, EXPANDED_ROWS};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn full_edit_save_collapse_round_trip() {
    let mut tree = MockTree::new().with_textarea("comment-9", "", 1);
    let mut transport = MockTransport::new();
    let mut fader = Fader::new();
    let mut editor = CommentEditor::new("obs-204", "comment-9");

    editor.expand(&mut tree).unwrap();
    assert_eq!(tree.rows("comment-9").unwrap(), EXPANDED_ROWS);

    tree.set_text("comment-9", "a\nb\nc").unwrap();

    let handle = editor
        .save(&mut tree, &mut transport, &mut fader, Box::new(|_| {}))
        .unwrap();
    assert_eq!(editor.state(), FieldState::Saving);

    // The highlight runs to completion independently of the network.
    let ticks = run_fade_to_completion(&mut fader, handle, &mut tree, 1000);
    assert_eq!(ticks, 100);
    let history = tree.background_history("comment-9");
    assert_eq!(history.first().copied(), Some(Rgb::PALE_YELLOW));
    assert!(history.iter().all(|c| c.r == 0xFF && c.g == 0xFF));

    editor.complete(&mut tree, Some("ok".to_string())).unwrap();
    assert_eq!(editor.state(), FieldState::Collapsed);
    assert_eq!(tree.rows("comment-9").unwrap(), 3);
    assert!(!tree.contains("save-comment-9"));
}

#[test]
fn completion_routed_through_transport_callback() {
    // Wire the completion the way an embedding host does: the callback
    // captures shared handles and re-enters the editor.
    let tree = Rc::new(RefCell::new(
        MockTree::new().with_textarea("comment-1", "one line", 1),
    ));
    let editor = Rc::new(RefCell::new(CommentEditor::new("obs-7", "comment-1")));
    let mut transport = MockTransport::new();
    let mut fader = Fader::new();

    editor.borrow_mut().expand(&mut *tree.borrow_mut()).unwrap();

    let cb_tree = Rc::clone(&tree);
    let cb_editor = Rc::clone(&editor);
    let result: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
    let cb_result = Rc::clone(&result);

    editor
        .borrow_mut()
        .save(
            &mut *tree.borrow_mut(),
            &mut transport,
            &mut fader,
            Box::new(move |response| {
                let handled = cb_editor
                    .borrow_mut()
                    .complete(&mut *cb_tree.borrow_mut(), response)
                    .unwrap();
                *cb_result.borrow_mut() = Some(handled);
            }),
        )
        .unwrap();

    assert_eq!(transport.pending_count(), 1);
    assert!(transport.fire_next(Some("ok")));

    assert_eq!(*result.borrow(), Some(true));
    assert_eq!(editor.borrow().state(), FieldState::Collapsed);
    assert_eq!(tree.borrow().rows("comment-1").unwrap(), 1);
}

#[test]
fn request_body_is_form_encoded() {
    let mut tree = MockTree::new().with_textarea("comment-2", "line 1\nline 2", 1);
    let mut transport = MockTransport::new();
    let mut fader = Fader::new();
    let mut editor = CommentEditor::new("obs 10", "comment-2");

    editor.expand(&mut tree).unwrap();
    editor
        .save(&mut tree, &mut transport, &mut fader, Box::new(|_| {}))
        .unwrap();

    let body = transport.sent()[0].to_form_body();
    assert_eq!(
        body,
        "ownerRecordId=obs+10&fieldId=comment-2&content=line+1%0Aline+2"
    );
}
