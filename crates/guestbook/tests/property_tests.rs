//! Property tests for the widget invariants.

#![forbid(unsafe_code)]

use guestbook::app::App;
use guestbook::theme::Theme;
use guestbook::widgets::{Board, Counter};
use proptest::prelude::*;
use tealight::simulator::Simulator;

proptest! {
    /// The tally after any trigger sequence is the algebraic sum of
    /// its steps.
    #[test]
    fn tally_equals_algebraic_sum(steps in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut counter = Counter::new();
        let mut expected = 0i64;

        for up in steps {
            if up {
                counter.increment();
                expected += 1;
            } else {
                counter.decrement();
                expected -= 1;
            }
        }

        prop_assert_eq!(counter.value(), expected);
        prop_assert_eq!(counter.render_value(), expected.to_string());
    }

    /// Same property end-to-end: key events through the app model.
    #[test]
    fn tally_key_sequence_sums_through_the_app(steps in proptest::collection::vec(any::<bool>(), 0..100)) {
        let mut sim = Simulator::new(App::with_fixture(Theme::plain()));
        let keys: String = steps.iter().map(|&up| if up { '+' } else { '-' }).collect();
        let expected: i64 = steps.iter().map(|&up| if up { 1i64 } else { -1 }).sum();

        sim.type_str(&keys);
        sim.run_until_idle();

        prop_assert_eq!(sim.model().counter().value(), expected);
    }

    /// After k submissions the board holds 2 + k comments and the
    /// tail is the most recent record.
    #[test]
    fn board_grows_by_one_per_submission(
        entries in proptest::collection::vec(("\\PC{1,20}", "\\PC{1,40}"), 0..50)
    ) {
        let mut board = Board::with_fixture();

        for (k, (name, body)) in entries.iter().enumerate() {
            board.submit(name.clone(), body.clone());
            prop_assert_eq!(board.len(), 2 + k + 1);
        }

        if let Some((name, body)) = entries.last() {
            let tail = board.comments().last().unwrap();
            prop_assert_eq!(&tail.name, name);
            prop_assert_eq!(&tail.body, body);
        }
    }

    /// Blank form submissions never change the list, whatever
    /// whitespace they carry.
    #[test]
    fn blank_submissions_never_append(spaces in " {0,8}") {
        let mut board = Board::with_fixture();
        board.name.set_value(&spaces);
        board.body.set_value("This is a test");

        prop_assert!(board.try_submit().is_err());
        prop_assert_eq!(board.len(), 2);
    }
}
