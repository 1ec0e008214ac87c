//! End-to-end tests for the guestbook, driven through the simulator.
//!
//! Each test builds its own simulator, so fixtures never leak between
//! cases. The scenarios walk the app the way a visitor would: nudge
//! the tally, read the seeded comments, type a comment through the
//! form, and submit it.

#![forbid(unsafe_code)]

use guestbook::app::{App, Focus};
use guestbook::theme::Theme;
use tealight::simulator::Simulator;
use tealight::{Key, Message, WindowSizeMsg};

/// A freshly mounted app with init commands drained.
fn mount() -> Simulator<App> {
    let mut sim = Simulator::new(App::with_fixture(Theme::plain()));
    sim.init();
    sim.run_until_idle();
    sim
}

#[test]
fn loads_the_app() {
    let sim = mount();
    let frame = sim.last_frame().unwrap();
    assert!(frame.contains("Guestbook"));
}

#[test]
fn tally_starts_at_zero() {
    let sim = mount();
    assert!(sim.last_frame().unwrap().contains("Visitor tally: 0"));
}

#[test]
fn increment_renders_one() {
    let mut sim = mount();
    sim.type_str("+");
    sim.run_until_idle();

    assert_eq!(sim.model().counter().render_value(), "1");
    assert!(sim.last_frame().unwrap().contains("Visitor tally: 1"));
}

#[test]
fn decrement_renders_minus_one() {
    let mut sim = mount();
    sim.type_str("-");
    sim.run_until_idle();

    assert_eq!(sim.model().counter().render_value(), "-1");
    assert!(sim.last_frame().unwrap().contains("Visitor tally: -1"));
}

#[test]
fn arrow_keys_drive_the_tally_too() {
    let mut sim = mount();
    sim.press(Key::Up);
    sim.press(Key::Up);
    sim.press(Key::Down);
    sim.run_until_idle();

    assert!(sim.last_frame().unwrap().contains("Visitor tally: 1"));
}

#[test]
fn mixed_trigger_sequence_sums() {
    let mut sim = mount();
    sim.type_str("++-++--+");
    sim.run_until_idle();

    assert_eq!(sim.model().counter().value(), 2);
}

#[test]
fn has_pre_populated_comments() {
    let sim = mount();

    assert_eq!(sim.model().board().len(), 2);
    let frame = sim.last_frame().unwrap();
    assert!(frame.contains("Comments (2)"));
    assert!(frame.contains("Margaret Hale"));
    assert!(frame.contains("Arthur Clennam"));
}

#[test]
fn can_add_a_comment() {
    let mut sim = mount();

    sim.press(Key::Tab); // tally -> name field
    sim.type_str("John Jackson");
    sim.press(Key::Tab); // name -> message field
    sim.type_str("This is a test");
    sim.press(Key::Enter);
    sim.run_until_idle();

    assert_eq!(sim.model().board().len(), 3);

    let frame = sim.last_frame().unwrap();
    assert!(frame.contains("Comments (3)"));
    assert!(frame.contains("John Jackson"));
    assert!(frame.contains("This is a test"));
    assert!(frame.contains("Posted comment #3 from John Jackson."));
}

#[test]
fn submission_returns_focus_to_the_name_field() {
    let mut sim = mount();

    sim.press(Key::Tab);
    sim.type_str("Ada");
    sim.press(Key::Tab);
    sim.type_str("hello");
    sim.press(Key::Enter);
    sim.run_until_idle();

    assert_eq!(sim.model().focus(), Focus::Name);

    // A second comment goes straight in.
    sim.type_str("Kit");
    sim.press(Key::Tab);
    sim.type_str("me again");
    sim.press(Key::Enter);
    sim.run_until_idle();

    assert_eq!(sim.model().board().len(), 4);
}

#[test]
fn blank_submission_is_refused() {
    let mut sim = mount();

    sim.press(Key::Tab);
    sim.press(Key::Enter);
    sim.run_until_idle();

    assert_eq!(sim.model().board().len(), 2);
    assert!(
        sim.last_frame()
            .unwrap()
            .contains("Not posted: a name is required.")
    );
}

#[test]
fn blank_body_is_refused_and_name_survives() {
    let mut sim = mount();

    sim.press(Key::Tab);
    sim.type_str("John Jackson");
    sim.press(Key::Enter);
    sim.run_until_idle();

    assert_eq!(sim.model().board().len(), 2);
    assert_eq!(sim.model().board().name.value(), "John Jackson");
    assert!(
        sim.last_frame()
            .unwrap()
            .contains("Not posted: a message is required.")
    );
}

#[test]
fn q_quits_from_the_tally() {
    let mut sim = mount();
    sim.type_str("q");
    sim.run_until_idle();

    assert!(sim.is_quit());
}

#[test]
fn esc_quits_mid_form() {
    let mut sim = mount();
    sim.press(Key::Tab);
    sim.type_str("half a nam");
    sim.press(Key::Esc);
    sim.run_until_idle();

    assert!(sim.is_quit());
}

#[test]
fn every_update_is_followed_by_a_render() {
    let mut sim = mount();
    sim.type_str("++-");
    sim.run_until_idle();

    let stats = sim.stats();
    // One frame from init, then one per processed message.
    assert_eq!(stats.view_calls, stats.update_calls + 1);
}

#[test]
fn resize_reaches_the_view() {
    let mut sim = mount();
    sim.send(Message::new(WindowSizeMsg {
        width: 24,
        height: 40,
    }));
    sim.run_until_idle();

    assert!(sim.last_frame().unwrap().contains(&"\u{2500}".repeat(24)));
}
