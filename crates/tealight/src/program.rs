//! Program lifecycle and event loop.
//!
//! [`Program`] owns the terminal for the lifetime of the application:
//! it enables raw mode, polls crossterm events, dispatches messages to
//! the model one at a time, and re-renders after every update.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::command::Cmd;
use crate::key::{Key, from_crossterm_key};
use crate::message::{
    BatchMsg, InterruptMsg, Message, QuitMsg, RequestWindowSizeMsg, SetWindowTitleMsg,
    WindowSizeMsg,
};

/// Errors that can occur while running a tealight program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    ///
    /// Typically the terminal is not available (running in a pipe) or
    /// was closed underneath us.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Raw mode disables line buffering and echo; the error usually
    /// means stdin is not a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        /// Whether we were enabling or disabling.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write the rendered view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for tealight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for TUI applications.
///
/// Implement this trait to define your application's behavior.
///
/// # Example
///
/// ```rust
/// use tealight::{Cmd, Message, Model};
///
/// struct Tally { value: i64 }
///
/// impl Model for Tally {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i64>() {
///             self.value += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         self.value.to_string()
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    ///
    /// Called once when the program starts.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    ///
    /// The pure update function at the heart of the Elm Architecture.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// Must be a pure projection of state with no side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Target frames per second for event polling.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// Manages the full lifecycle of a TUI application: terminal setup
/// and teardown, event polling, message dispatch, and rendering.
///
/// # Example
///
/// ```rust,ignore
/// use tealight::Program;
///
/// let final_model = Program::new(MyModel::new())
///     .with_alt_screen()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use the alternate screen buffer (full-screen mode).
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Set the target frames per second.
    ///
    /// Default is 60. Valid range is 1-120.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Run the program and return the final model state.
    pub fn run(self) -> Result<M> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Run the program against a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawMode {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        execute!(writer, Hide)?;

        let result = self.event_loop(&mut writer);

        // Teardown mirrors setup; failures here are not worth masking
        // the loop's own result.
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Seed the model with the current window size.
        if let Ok((width, height)) = terminal::size() {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            self.handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            // Poll with frame-rate limiting; poll doubles as the sleep.
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        // Key presses only; ignore release/repeat reports.
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }

                        let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
                        if key_msg.key == Key::CtrlC {
                            let _ = tx.send(Message::new(InterruptMsg));
                        } else {
                            let _ = tx.send(Message::new(key_msg));
                        }
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            // Drain all pending messages before rendering.
            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    tracing::debug!("quit requested, leaving event loop");
                    return Ok(self.model);
                }

                if msg.is::<BatchMsg>() {
                    // Expanded in handle_command; nothing to do here.
                    continue;
                }

                if let Some(title_msg) = msg.downcast_ref::<SetWindowTitleMsg>() {
                    execute!(writer, terminal::SetTitle(&title_msg.0))?;
                    continue;
                }

                if msg.is::<RequestWindowSizeMsg>() {
                    if let Ok((width, height)) = terminal::size() {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    continue;
                }

                if let Some(cmd) = self.model.update(msg) {
                    self.handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn handle_command(&self, cmd: Cmd, tx: Sender<Message>) {
        thread::spawn(move || {
            if let Some(msg) = cmd.execute() {
                if msg.is::<BatchMsg>() {
                    if let Some(batch) = msg.downcast::<BatchMsg>() {
                        for cmd in batch.0 {
                            let tx_clone = tx.clone();
                            thread::spawn(move || {
                                if let Some(msg) = cmd.execute() {
                                    let _ = tx_clone.send(msg);
                                }
                            });
                        }
                    }
                } else {
                    let _ = tx.send(msg);
                }
            }
        });
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if the view hasn't changed.
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        write!(writer, "{view}").map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}
