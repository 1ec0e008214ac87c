//! Headless program driver for tests.
//!
//! [`Simulator`] runs a [`Model`] through the same
//! init/update/view lifecycle as [`crate::Program`], without a
//! terminal. Tests queue messages (or whole typed strings), step the
//! loop, and inspect the model and every captured frame. Each test
//! builds its own simulator, so fixture lifecycle is explicit and
//! nothing leaks between tests.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::key::{Key, KeyMsg};
use crate::message::{BatchMsg, Message, QuitMsg};
use crate::program::Model;

/// Counters tracked while simulating.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of times `init` was called.
    pub init_calls: usize,
    /// Number of times `update` was called.
    pub update_calls: usize,
    /// Number of times `view` was called.
    pub view_calls: usize,
    /// Number of commands returned from `init`/`update`.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A headless driver for testing models without a terminal.
///
/// # Example
///
/// ```rust
/// use tealight::{Cmd, Message, Model, simulator::Simulator};
///
/// struct Tally { value: i64 }
///
/// impl Model for Tally {
///     fn init(&self) -> Option<Cmd> { None }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i64>() {
///             self.value += n;
///         }
///         None
///     }
///     fn view(&self) -> String { format!("tally: {}", self.value) }
/// }
///
/// let mut sim = Simulator::new(Tally { value: 0 });
/// sim.send(Message::new(5i64));
/// sim.send(Message::new(-2i64));
/// sim.run_until_idle();
///
/// assert_eq!(sim.model().value, 3);
/// assert_eq!(sim.last_frame(), Some("tally: 3"));
/// ```
pub struct Simulator<M: Model> {
    model: M,
    queue: VecDeque<Message>,
    frames: Vec<String>,
    stats: RunStats,
    initialized: bool,
}

impl<M: Model> Simulator<M> {
    /// Create a new simulator around the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            queue: VecDeque::new(),
            frames: Vec::new(),
            stats: RunStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model and capture the first frame.
    ///
    /// Any startup command is executed and its message queued, the
    /// way the real program feeds command results back into the loop.
    /// Calling `init` twice is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        if let Some(cmd) = self.model.init() {
            self.stats.commands_returned += 1;
            self.execute(cmd);
        }

        self.stats.view_calls += 1;
        self.frames.push(self.model.view());
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.queue.push_back(msg);
    }

    /// Queue a key press.
    pub fn press(&mut self, key: Key) {
        self.send(Message::new(KeyMsg::from_key(key)));
    }

    /// Queue one key message per character of `text`.
    ///
    /// Spaces are queued as [`Key::Space`], matching what the
    /// terminal event translation produces.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == ' ' {
                self.press(Key::Space);
            } else {
                self.send(Message::new(KeyMsg::from_char(c)));
            }
        }
    }

    /// Process one message: update the model, then capture a frame.
    ///
    /// Initializes first if needed. Commands returned by the update
    /// are executed immediately and their messages appended to the
    /// queue (batches expand in order). Returns `false` once the
    /// queue is empty or quit was requested.
    pub fn step(&mut self) -> bool {
        if !self.initialized {
            self.init();
        }
        if self.stats.quit_requested {
            return false;
        }

        let Some(msg) = self.queue.pop_front() else {
            return false;
        };

        if msg.is::<QuitMsg>() {
            self.stats.quit_requested = true;
            return false;
        }

        self.stats.update_calls += 1;
        if let Some(cmd) = self.model.update(msg) {
            self.stats.commands_returned += 1;
            self.execute(cmd);
        }

        self.stats.view_calls += 1;
        self.frames.push(self.model.view());

        true
    }

    /// Process messages until the queue drains or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_idle(&mut self) -> usize {
        let mut processed = 0;
        while self.step() {
            processed += 1;
        }
        processed
    }

    /// Execute a command synchronously, queueing any message it
    /// produces. Batches expand depth-first, which keeps runs
    /// deterministic.
    fn execute(&mut self, cmd: Cmd) {
        if let Some(msg) = cmd.execute() {
            if msg.is::<BatchMsg>() {
                if let Some(batch) = msg.downcast::<BatchMsg>() {
                    for cmd in batch.0 {
                        self.execute(cmd);
                    }
                }
            } else {
                self.queue.push_back(msg);
            }
        }
    }

    /// Borrow the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutably borrow the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// All captured frames, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent captured frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// The run counters.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Whether quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Number of messages still queued.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{batch, quit};

    /// Sums every i64 message it sees; `!` asks to quit.
    struct Summer {
        total: i64,
    }

    impl Model for Summer {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(n) = msg.downcast_ref::<i64>() {
                self.total += n;
                return None;
            }
            if let Some(key) = msg.downcast_ref::<KeyMsg>()
                && key.chars == ['!']
            {
                return Some(quit());
            }
            None
        }

        fn view(&self) -> String {
            format!("total: {}", self.total)
        }
    }

    #[test]
    fn init_called_once_and_captures_frame() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.init();
        sim.init();

        assert_eq!(sim.stats().init_calls, 1);
        assert_eq!(sim.frames().len(), 1);
        assert_eq!(sim.last_frame(), Some("total: 0"));
    }

    #[test]
    fn step_updates_and_renders() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.send(Message::new(5i64));
        sim.send(Message::new(3i64));

        assert!(sim.step());
        assert!(sim.step());
        assert!(!sim.step());

        assert_eq!(sim.model().total, 8);
        assert_eq!(sim.stats().update_calls, 2);
        // One frame from init plus one per update.
        assert_eq!(sim.stats().view_calls, 3);
    }

    #[test]
    fn step_implicitly_initializes() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.send(Message::new(1i64));
        sim.step();

        assert_eq!(sim.stats().init_calls, 1);
        assert_eq!(sim.model().total, 1);
    }

    #[test]
    fn run_until_idle_drains_queue() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.send(Message::new(1i64));
        sim.send(Message::new(2i64));
        sim.send(Message::new(3i64));

        let processed = sim.run_until_idle();

        assert_eq!(processed, 3);
        assert_eq!(sim.model().total, 6);
    }

    #[test]
    fn quit_stops_processing() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.send(Message::new(1i64));
        sim.type_str("!");
        sim.run_until_idle();
        sim.send(Message::new(QuitMsg));
        sim.send(Message::new(100i64));
        sim.run_until_idle();

        assert!(sim.is_quit());
        // The message behind the quit never ran.
        assert_eq!(sim.model().total, 1);
    }

    #[test]
    fn commands_feed_back_into_queue() {
        struct Chained {
            seen: Vec<i64>,
        }

        impl Model for Chained {
            fn init(&self) -> Option<Cmd> {
                Some(batch(vec![
                    Some(Cmd::new(|| Message::new(1i64))),
                    Some(Cmd::new(|| Message::new(2i64))),
                ])
                .unwrap())
            }

            fn update(&mut self, msg: Message) -> Option<Cmd> {
                if let Some(n) = msg.downcast::<i64>() {
                    self.seen.push(n);
                }
                None
            }

            fn view(&self) -> String {
                format!("{:?}", self.seen)
            }
        }

        let mut sim = Simulator::new(Chained { seen: Vec::new() });
        sim.init();
        sim.run_until_idle();

        assert_eq!(sim.model().seen, vec![1, 2]);
    }

    #[test]
    fn type_str_queues_one_message_per_char() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.type_str("ab c");
        assert_eq!(sim.pending(), 4);
    }

    #[test]
    fn into_model_returns_final_state() {
        let mut sim = Simulator::new(Summer { total: 0 });
        sim.send(Message::new(42i64));
        sim.run_until_idle();

        let model = sim.into_model();
        assert_eq!(model.total, 42);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Invariants: every queued message is processed exactly
            // once, in order, and every update produces a frame.
            #[test]
            fn run_until_idle_processes_in_order(
                values in proptest::collection::vec(-1000i64..1000, 0..64)
            ) {
                let mut sim = Simulator::new(Summer { total: 0 });
                for v in &values {
                    sim.send(Message::new(*v));
                }

                let processed = sim.run_until_idle();

                prop_assert_eq!(processed, values.len());
                prop_assert_eq!(sim.model().total, values.iter().sum::<i64>());
                prop_assert_eq!(sim.stats().view_calls, sim.stats().update_calls + 1);
                prop_assert_eq!(sim.frames().len(), values.len() + 1);
            }
        }
    }
}
