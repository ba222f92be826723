//! Typewriter text cycler.
//!
//! A finite state machine that types a phrase character by character,
//! holds it on screen, deletes it, and advances to the next phrase.
//! The host drives it with a millisecond clock via [`Typewriter::advance`];
//! only one deadline is ever pending, re-armed on every transition.

use crate::MotionError;

/// Typewriter configuration.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    /// Phrases to cycle through. Must be non-empty.
    pub phrases: Vec<String>,
    /// Milliseconds between typed characters.
    pub type_interval_ms: u64,
    /// Milliseconds between deleted characters.
    pub delete_interval_ms: u64,
    /// Milliseconds a completed phrase stays on screen.
    pub hold_ms: u64,
    /// Whether to loop back to the first phrase after the last.
    pub cycle: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            type_interval_ms: 100,
            delete_interval_ms: 50,
            hold_ms: 2000,
            cycle: true,
        }
    }
}

/// State machine modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Appending one character per type interval.
    Typing,
    /// Full phrase on screen, waiting out the hold interval.
    HoldingFull,
    /// Removing one character per delete interval.
    Deleting,
    /// Selecting the next phrase index. Resolved instantaneously, so
    /// this mode is never observable between `advance` calls.
    Advancing,
    /// Absorbing state: the machine stops with the last phrase shown.
    Terminal,
}

/// The typewriter state machine.
#[derive(Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase_index: usize,
    text: String,
    mode: Mode,
    /// The single pending deadline, in host clock milliseconds.
    deadline_ms: Option<u64>,
    disposed: bool,
}

impl Typewriter {
    /// Build a typewriter. Fails if the phrase list is empty or any
    /// interval is zero (a zero interval would re-arm the same
    /// deadline forever inside `advance`).
    pub fn new(config: TypewriterConfig) -> Result<Self, MotionError> {
        if config.phrases.is_empty() {
            return Err(MotionError::EmptyPhrases);
        }
        if config.type_interval_ms == 0 || config.delete_interval_ms == 0 || config.hold_ms == 0 {
            return Err(MotionError::ZeroInterval);
        }
        Ok(Self {
            config,
            phrase_index: 0,
            text: String::new(),
            mode: Mode::Typing,
            deadline_ms: None,
            disposed: false,
        })
    }

    /// Arm the first deadline against the host clock. Calling start on
    /// a running or disposed machine is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.disposed || self.deadline_ms.is_some() || self.mode == Mode::Terminal {
            return;
        }
        self.deadline_ms = Some(now_ms + self.config.type_interval_ms);
    }

    /// Advance the host clock, firing every deadline that has come due.
    ///
    /// Deadlines re-arm relative to the expired deadline rather than
    /// `now_ms`, so a coarse host clock does not accumulate drift.
    pub fn advance(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        while let Some(due) = self.deadline_ms {
            if due > now_ms {
                break;
            }
            self.fire(due);
        }
    }

    /// Cancel the pending deadline. Idempotent, safe before `start`.
    pub fn dispose(&mut self) {
        self.deadline_ms = None;
        self.disposed = true;
    }

    /// The currently displayed prefix of the indexed phrase.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// True once the machine has stopped or been disposed.
    pub fn is_finished(&self) -> bool {
        self.disposed || self.mode == Mode::Terminal
    }

    /// Display line: the text plus a caret when `caret_visible`.
    pub fn display(&self, caret_visible: bool) -> String {
        if caret_visible {
            format!("{}|", self.text)
        } else {
            self.text.clone()
        }
    }

    fn phrase(&self) -> &str {
        &self.config.phrases[self.phrase_index]
    }

    fn last_phrase(&self) -> bool {
        self.phrase_index + 1 == self.config.phrases.len()
    }

    /// Process one expired deadline and re-arm (or clear) the next.
    fn fire(&mut self, due_ms: u64) {
        match self.mode {
            Mode::Typing => {
                let phrase = self.phrase();
                let shown = self.text.chars().count();
                if let Some(next) = phrase.chars().nth(shown) {
                    self.text.push(next);
                }
                if self.text == self.phrase() {
                    self.mode = Mode::HoldingFull;
                    self.deadline_ms = Some(due_ms + self.config.hold_ms);
                } else {
                    self.deadline_ms = Some(due_ms + self.config.type_interval_ms);
                }
            }
            Mode::HoldingFull => {
                if self.config.cycle || !self.last_phrase() {
                    self.mode = Mode::Deleting;
                    self.deadline_ms = Some(due_ms + self.config.delete_interval_ms);
                } else {
                    self.mode = Mode::Terminal;
                    self.deadline_ms = None;
                }
            }
            Mode::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.mode = Mode::Advancing;
                    // Advancing resolves within the same fire.
                    let len = self.config.phrases.len();
                    self.phrase_index = if self.config.cycle {
                        (self.phrase_index + 1) % len
                    } else {
                        (self.phrase_index + 1).min(len - 1)
                    };
                    self.mode = Mode::Typing;
                    self.deadline_ms = Some(due_ms + self.config.type_interval_ms);
                } else {
                    self.deadline_ms = Some(due_ms + self.config.delete_interval_ms);
                }
            }
            Mode::Advancing => unreachable!("advancing resolves within a fire"),
            Mode::Terminal => {
                self.deadline_ms = None;
            }
        }
    }
}
