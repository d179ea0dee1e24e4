//! Card flip behavior across keyboard, mouse and nested actions.

mod common;

use bizcard::card::view::back_layout;
use bizcard::card::{CardAction, Face, FaceTransform, FlipIntent, FlipReducer, FlipState};
use bizcard::ui::app::Focus;
use bizcard::ui::input::{handle_key, handle_mouse};
use bizcard::ui::mvi::Reducer;
use common::*;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

#[test]
fn reducer_inverts_on_every_toggle() {
    let mut state = FlipState::default();
    assert_eq!(state.face(), Face::Front);
    for n in 1..=5 {
        state = FlipReducer::reduce(state, FlipIntent::Toggle);
        assert_eq!(state.is_flipped(), n % 2 == 1);
    }
}

#[test]
fn flip_shortcut_alternates_faces() {
    let mut h = harness().loaded();
    handle_key(&mut h.app, press_key(KeyCode::Char('f')));
    assert_eq!(h.app.face(), Face::Back);
    handle_key(&mut h.app, press_key(KeyCode::Char('f')));
    assert_eq!(h.app.face(), Face::Front);
}

#[test]
fn rapid_toggles_land_on_parity_of_count() {
    let mut h = harness().loaded();
    // No settling between toggles: animation reversals must not drop any.
    for _ in 0..7 {
        h.app.toggle();
        h.app.on_tick();
    }
    h.settle();
    assert_eq!(h.app.face(), Face::Back);
    assert_eq!(h.cue_count(), 7);
}

#[test]
fn each_toggle_requests_haptics_and_restarts_cue() {
    let mut h = harness().loaded();
    h.app.toggle();
    h.app.toggle();
    let calls = h.effect_calls();
    assert_eq!(
        calls,
        vec![
            EffectCall::Haptic(std::time::Duration::from_millis(50)),
            EffectCall::Cue,
            EffectCall::Haptic(std::time::Duration::from_millis(50)),
            EffectCall::Cue,
        ]
    );
}

#[test]
fn failing_effects_never_block_the_flip() {
    let mut h = harness().failing_effects().loaded();
    h.app.toggle();
    assert_eq!(h.app.face(), Face::Back);
    assert!(!h.app.toast().is_visible());
}

#[test]
fn enter_on_card_flips_but_enter_on_action_does_not() {
    let mut h = harness().loaded();
    handle_key(&mut h.app, press_key(KeyCode::Enter));
    assert_eq!(h.app.face(), Face::Back);
    h.settle();

    handle_key(&mut h.app, press_key(KeyCode::Tab));
    assert_eq!(h.app.focus(), Focus::Action(CardAction::CopyPhone));

    handle_key(&mut h.app, press_key(KeyCode::Enter));
    assert_eq!(h.app.face(), Face::Back, "nested action must not flip");
    assert_eq!(h.clipboard.lock().as_slice(), ["+1-555-0100"]);

    handle_key(&mut h.app, press_key(KeyCode::Char(' ')));
    assert_eq!(h.app.face(), Face::Back);
    assert_eq!(h.clipboard.lock().len(), 2);
}

#[test]
fn focus_returns_to_card_when_front_shows() {
    let mut h = harness().loaded();
    h.app.toggle();
    h.settle();
    handle_key(&mut h.app, press_key(KeyCode::BackTab));
    assert_eq!(h.app.focus(), Focus::Action(CardAction::CopyShortLink));

    h.app.toggle();
    assert_eq!(h.app.focus(), Focus::Card);
    handle_key(&mut h.app, press_key(KeyCode::Tab));
    assert_eq!(h.app.focus(), Focus::Card);
}

#[test]
fn escape_leaves_action_focus_before_quitting() {
    let mut h = harness().loaded();
    h.app.toggle();
    h.settle();
    handle_key(&mut h.app, press_key(KeyCode::Tab));
    handle_key(&mut h.app, press_key(KeyCode::Esc));
    assert_eq!(h.app.focus(), Focus::Card);
    assert!(!h.app.should_quit());

    handle_key(&mut h.app, press_key(KeyCode::Esc));
    assert!(h.app.should_quit());
}

#[test]
fn click_on_card_surface_flips() {
    let mut h = harness().loaded();
    let (x, y) = h.card_origin();
    handle_mouse(&mut h.app, click(x + 2, y + 2));
    assert_eq!(h.app.face(), Face::Back);
}

#[test]
fn click_outside_card_does_nothing() {
    let mut h = harness().loaded();
    handle_mouse(&mut h.app, click(0, 0));
    assert_eq!(h.app.face(), Face::Front);
}

#[test]
fn click_on_back_action_runs_it_without_flipping() {
    let mut h = harness().loaded();
    h.app.toggle();
    h.settle();

    let config = h.app.config().card.clone();
    let qr = h.app.content().and_then(|content| content.qr.as_ref().ok());
    let layout = back_layout(Rect::new(0, 0, config.face_width, config.face_height), qr);
    let (_, email_row) = layout
        .actions
        .iter()
        .find(|(action, _)| *action == CardAction::CopyEmail)
        .copied()
        .expect("email row is laid out");

    let (x, y) = h.card_origin();
    handle_mouse(&mut h.app, click(x + email_row.x + 1, y + email_row.y));
    assert_eq!(h.app.face(), Face::Back, "child activation must not flip");
    assert_eq!(h.clipboard.lock().as_slice(), ["alex@example.com"]);
}

#[test]
fn click_on_back_link_opens_it_without_flipping() {
    let mut h = harness().loaded();
    h.app.toggle();
    h.settle();

    let config = h.app.config().card.clone();
    let qr = h.app.content().and_then(|content| content.qr.as_ref().ok());
    let layout = back_layout(Rect::new(0, 0, config.face_width, config.face_height), qr);
    let (_, github_row) = layout
        .actions
        .iter()
        .find(|(action, _)| *action == CardAction::OpenGithub)
        .copied()
        .expect("github row is laid out");

    let (x, y) = h.card_origin();
    handle_mouse(&mut h.app, click(x + github_row.x, y + github_row.y));
    assert_eq!(h.app.face(), Face::Back);
    assert!(h
        .effect_calls()
        .contains(&EffectCall::Open("https://github.com/alex".to_string())));
}

#[test]
fn back_surface_keeps_its_resting_rotation_across_flips() {
    let mut h = harness().loaded();
    for _ in 0..3 {
        h.app.toggle();
    }
    let back = h.app.surfaces().get(Face::Back).expect("back mounted");
    assert_eq!(back.transform(), FaceTransform::RotatedY180);
    let front = h.app.surfaces().get(Face::Front).expect("front mounted");
    assert_eq!(front.transform(), FaceTransform::Identity);
}
