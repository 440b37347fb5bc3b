//! Hero typing animation.
//!
//! [`TypingState`] is the pure "type, hold, delete, hold, next phrase"
//! machine. [`TypingAnimator`] drives it through a [`Scheduler`] and writes
//! every frame into a [`TextSink`]. Both are host-agnostic: the web crate
//! plugs in a browser timeout and a reactive signal, tests plug in a
//! [`VirtualClock`](crate::clock::VirtualClock).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Deserialize;

use crate::error::TypingError;

// ============================================================================
// Configuration
// ============================================================================

/// Frame delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingSpeeds {
    /// Delay after a character is typed.
    pub type_ms: u32,
    /// Delay after a character is deleted.
    pub delete_ms: u32,
    /// Dwell once the whole phrase is shown.
    pub hold_full_ms: u32,
    /// Dwell once the phrase is fully deleted, before the next one starts.
    pub hold_empty_ms: u32,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

// ============================================================================
// State machine
// ============================================================================

/// What the animation is doing until the next tick fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Typing forward.
    #[default]
    Typing,
    /// Deleting backward.
    Deleting,
    /// Full phrase shown; deletion starts on the next tick.
    HoldingFull,
    /// Phrase emptied; the next phrase starts on the next tick.
    HoldingEmpty,
}

impl Phase {
    /// Whether the next tick removes a character.
    pub fn is_deleting(self) -> bool {
        matches!(self, Self::Deleting | Self::HoldingFull)
    }
}

/// One rendered frame: the text to show and how long until the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

/// Type/delete cycle over a fixed, non-empty phrase list.
///
/// `char_index` counts Unicode scalar values, so multi-byte phrases are
/// never split inside a character.
#[derive(Debug, Clone)]
pub struct TypingState {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    speeds: TypingSpeeds,
}

impl TypingState {
    /// Creates a state positioned before the first character of the first phrase.
    ///
    /// # Errors
    ///
    /// [`TypingError::NoPhrases`] for an empty list and
    /// [`TypingError::EmptyPhrase`] for a phrase without characters.
    pub fn new<I, P>(phrases: I, speeds: TypingSpeeds) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypingError::NoPhrases);
        }
        if let Some(index) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypingError::EmptyPhrase { index });
        }

        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            speeds,
        })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase.is_deleting()
    }

    pub fn speeds(&self) -> TypingSpeeds {
        self.speeds
    }

    /// The phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// Advances by one character and returns the frame to render.
    ///
    /// The returned delay depends on the transition taken: reaching the
    /// full phrase yields the long dwell, emptying it yields the short dwell
    /// and moves to the next phrase.
    pub fn step(&mut self) -> Step {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();
        let deleting = self.phase.is_deleting();

        let mut delay_ms = if deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.speeds.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.speeds.type_ms
        };
        let text = char_prefix(phrase, self.char_index).to_owned();

        if !deleting && self.char_index == len {
            self.phase = Phase::HoldingFull;
            delay_ms = self.speeds.hold_full_ms;
        } else if deleting && self.char_index == 0 {
            self.phase = Phase::HoldingEmpty;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.speeds.hold_empty_ms;
        } else if deleting {
            self.phase = Phase::Deleting;
        } else {
            self.phase = Phase::Typing;
        }

        Step { text, delay_ms }
    }
}

/// First `n` characters of `s`.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

// ============================================================================
// Host seams
// ============================================================================

/// Something whose displayed text can be replaced.
pub trait TextSink {
    fn set_text(&self, text: &str);
}

/// Delayed one-shot callbacks.
///
/// Dropping the returned handle must cancel the callback if it has not run
/// yet. A handle may be dropped from inside its own callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

// ============================================================================
// Animator
// ============================================================================

struct Animation<K, S: Scheduler> {
    state: TypingState,
    sink: Rc<K>,
    scheduler: S,
    pending: Option<S::Handle>,
    /// Between `start` and `stop`.
    running: bool,
    /// Dwell requested by the last rendered frame; `None` before the first.
    last_delay_ms: Option<u32>,
}

/// Owns a [`TypingState`], its sink and the single pending timer.
///
/// Scheduled callbacks hold a weak reference, so dropping the animator
/// cancels the loop even if the host forgets to call [`stop`](Self::stop).
/// The sink is called with no borrow held, so it may call back into the
/// animator.
pub struct TypingAnimator<K: TextSink + 'static, S: Scheduler + 'static> {
    inner: Rc<RefCell<Animation<K, S>>>,
}

impl<K: TextSink + 'static, S: Scheduler + 'static> TypingAnimator<K, S> {
    /// Wraps a state. Nothing is rendered or scheduled until [`start`](Self::start).
    pub fn new(state: TypingState, sink: K, scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Animation {
                state,
                sink: Rc::new(sink),
                scheduler,
                pending: None,
                running: false,
                last_delay_ms: None,
            })),
        }
    }

    /// Builds the state from a phrase list and wraps it.
    pub fn with_phrases<I, P>(
        phrases: I,
        speeds: TypingSpeeds,
        sink: K,
        scheduler: S,
    ) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Ok(Self::new(TypingState::new(phrases, speeds)?, sink, scheduler))
    }

    /// Starts the loop. No-op while already running.
    ///
    /// The first start renders a frame immediately. After
    /// [`stop`](Self::stop) the next frame waits out the dwell of the last
    /// rendered one again, so holds are never skipped.
    pub fn start(&self) {
        let resume_after = {
            let mut animation = self.inner.borrow_mut();
            if animation.running {
                return;
            }
            animation.running = true;
            animation.last_delay_ms
        };

        match resume_after {
            None => tick(&self.inner),
            Some(delay_ms) => {
                let mut animation = self.inner.borrow_mut();
                let handle = schedule_tick(&self.inner, &animation.scheduler, delay_ms);
                let previous = animation.pending.replace(handle);
                drop(animation);
                drop(previous);
            }
        }
    }

    /// Cancels the pending tick. Safe to call repeatedly, including from
    /// inside the sink.
    pub fn stop(&self) {
        let pending = {
            let mut animation = self.inner.borrow_mut();
            animation.running = false;
            animation.pending.take()
        };
        drop(pending);
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Read access to the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&TypingState) -> R) -> R {
        f(&self.inner.borrow().state)
    }
}

fn schedule_tick<K: TextSink + 'static, S: Scheduler + 'static>(
    inner: &Rc<RefCell<Animation<K, S>>>,
    scheduler: &S,
    delay_ms: u32,
) -> S::Handle {
    let weak: Weak<RefCell<Animation<K, S>>> = Rc::downgrade(inner);
    scheduler.schedule(
        delay_ms,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                tick(&inner);
            }
        }),
    )
}

fn tick<K: TextSink + 'static, S: Scheduler + 'static>(inner: &Rc<RefCell<Animation<K, S>>>) {
    let (step, sink) = {
        let mut animation = inner.borrow_mut();
        if !animation.running {
            return;
        }
        let step = animation.state.step();
        animation.last_delay_ms = Some(step.delay_ms);
        (step, Rc::clone(&animation.sink))
    };

    sink.set_text(&step.text);

    let mut animation = inner.borrow_mut();
    // The sink may have stopped the loop
    if !animation.running {
        return;
    }
    let handle = schedule_tick(inner, &animation.scheduler, step.delay_ms);
    let previous = animation.pending.replace(handle);
    drop(animation);
    drop(previous);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl TextSink for Recorder {
        fn set_text(&self, text: &str) {
            self.0.borrow_mut().push(text.to_string());
        }
    }

    impl Recorder {
        fn frames(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    fn state(phrases: &[&str]) -> TypingState {
        TypingState::new(phrases.iter().copied(), TypingSpeeds::default()).unwrap()
    }

    #[test]
    fn test_rejects_empty_phrase_list() {
        let empty: [&str; 0] = [];
        assert_eq!(
            TypingState::new(empty, TypingSpeeds::default()).unwrap_err(),
            TypingError::NoPhrases
        );
    }

    #[test]
    fn test_rejects_empty_phrase() {
        let err = TypingState::new(["ok", ""], TypingSpeeds::default()).unwrap_err();
        assert_eq!(err, TypingError::EmptyPhrase { index: 1 });
    }

    #[test]
    fn test_single_phrase_cycle() {
        let mut s = state(&["Hi"]);
        let steps: Vec<(String, u32)> = (0..6)
            .map(|_| {
                let step = s.step();
                (step.text, step.delay_ms)
            })
            .collect();

        assert_eq!(
            steps,
            vec![
                ("H".to_string(), 100),
                ("Hi".to_string(), 2000),
                ("H".to_string(), 50),
                ("".to_string(), 500),
                ("H".to_string(), 100),
                ("Hi".to_string(), 2000),
            ]
        );
    }

    #[test]
    fn test_phase_transitions() {
        let mut s = state(&["ab"]);
        assert_eq!(s.phase(), Phase::Typing);
        s.step();
        assert_eq!(s.phase(), Phase::Typing);
        s.step();
        assert_eq!(s.phase(), Phase::HoldingFull);
        assert!(s.is_deleting());
        s.step();
        assert_eq!(s.phase(), Phase::Deleting);
        s.step();
        assert_eq!(s.phase(), Phase::HoldingEmpty);
        assert!(!s.is_deleting());
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut s = state(&["Ann", "Bo"]);
        // "Ann": 3 typed + 3 deleted
        for _ in 0..6 {
            s.step();
        }
        assert_eq!(s.phrase_index(), 1);
        assert_eq!(s.step().text, "B");
        // rest of "Bo": 1 typed + 2 deleted
        for _ in 0..3 {
            s.step();
        }
        assert_eq!(s.phrase_index(), 0);
        assert_eq!(s.step().text, "A");
    }

    #[test]
    fn test_char_index_stays_in_bounds() {
        let mut s = state(&["Simulation Engineer", "Go", "x"]);
        for _ in 0..500 {
            s.step();
            let len = s.current_phrase().chars().count();
            assert!(s.char_index() <= len);
        }
    }

    #[test]
    fn test_segments_are_monotonic() {
        let mut s = state(&["abcd"]);
        let mut previous = s.char_index();
        for _ in 0..4 {
            s.step();
            assert_eq!(s.char_index(), previous + 1);
            previous = s.char_index();
        }
        for _ in 0..4 {
            s.step();
            assert_eq!(s.char_index(), previous - 1);
            previous = s.char_index();
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut s = state(&["héé"]);
        assert_eq!(s.step().text, "h");
        assert_eq!(s.step().text, "hé");
        assert_eq!(s.step().text, "héé");
        assert_eq!(s.step().text, "hé");
    }

    #[test]
    fn test_custom_speeds() {
        let speeds = TypingSpeeds {
            type_ms: 7,
            delete_ms: 3,
            hold_full_ms: 11,
            hold_empty_ms: 13,
        };
        let mut s = TypingState::new(["ab"], speeds).unwrap();
        let delays: Vec<u32> = (0..4).map(|_| s.step().delay_ms).collect();
        assert_eq!(delays, vec![7, 11, 3, 13]);
    }

    #[test]
    fn test_start_renders_first_frame_immediately() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["Hi"]), sink.clone(), clock.clone());

        animator.start();
        assert_eq!(sink.frames(), vec!["H"]);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_delay(), Some(100));
    }

    #[test]
    fn test_start_is_idempotent() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["Hi"]), sink.clone(), clock.clone());

        animator.start();
        animator.start();
        assert_eq!(sink.frames().len(), 1);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_stop_twice_is_quiet() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["Hi"]), sink.clone(), clock.clone());

        animator.start();
        animator.stop();
        animator.stop();
        assert!(!animator.is_running());
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(sink.frames(), vec!["H"]);
    }

    #[test]
    fn test_restart_resumes() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["Hey"]), sink.clone(), clock.clone());

        animator.start();
        clock.fire_next();
        animator.stop();
        animator.start();
        assert_eq!(sink.frames(), vec!["H", "He"]);
        assert_eq!(clock.next_delay(), Some(100));

        clock.fire_next();
        assert_eq!(sink.frames(), vec!["H", "He", "Hey"]);
    }

    #[test]
    fn test_restart_keeps_full_phrase_hold() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["Hi"]), sink.clone(), clock.clone());

        animator.start();
        clock.fire_next();
        assert_eq!(clock.next_delay(), Some(2000));
        assert_eq!(animator.with_state(|s| s.phase()), Phase::HoldingFull);

        animator.stop();
        animator.start();
        assert_eq!(sink.frames(), vec!["H", "Hi"]);
        assert_eq!(clock.next_delay(), Some(2000));

        clock.advance(1999);
        assert_eq!(sink.frames(), vec!["H", "Hi"]);
        clock.advance(1);
        assert_eq!(sink.frames(), vec!["H", "Hi", "H"]);
    }

    #[test]
    fn test_restart_keeps_empty_hold() {
        let clock = VirtualClock::new();
        let sink = Recorder::default();
        let animator = TypingAnimator::new(state(&["a", "b"]), sink.clone(), clock.clone());

        animator.start();
        clock.fire_next();
        assert_eq!(sink.frames(), vec!["a", ""]);
        assert_eq!(clock.next_delay(), Some(500));

        animator.stop();
        animator.start();
        assert_eq!(clock.next_delay(), Some(500));
        clock.advance(500);
        assert_eq!(sink.frames(), vec!["a", "", "b"]);
    }

    /// Sink that stops its own animator once it sees `trigger`.
    struct StopOn {
        trigger: &'static str,
        frames: Rc<RefCell<Vec<String>>>,
        animator: Rc<RefCell<Weak<TypingAnimator<StopOn, VirtualClock>>>>,
    }

    impl TextSink for StopOn {
        fn set_text(&self, text: &str) {
            self.frames.borrow_mut().push(text.to_string());
            if text == self.trigger {
                if let Some(animator) = self.animator.borrow().upgrade() {
                    assert!(animator.is_running());
                    assert_eq!(animator.with_state(|s| s.char_index()), 2);
                    animator.stop();
                }
            }
        }
    }

    #[test]
    fn test_sink_can_stop_animator() {
        let clock = VirtualClock::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::new(RefCell::new(Weak::new()));
        let sink = StopOn {
            trigger: "He",
            frames: Rc::clone(&frames),
            animator: Rc::clone(&handle),
        };
        let animator = Rc::new(TypingAnimator::new(state(&["Hey"]), sink, clock.clone()));
        *handle.borrow_mut() = Rc::downgrade(&animator);

        animator.start();
        clock.fire_next();
        assert!(!animator.is_running());
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(*frames.borrow(), vec!["H", "He"]);
    }
}
