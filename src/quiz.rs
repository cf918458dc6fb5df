//! Core quiz state machine: rounds, guesses, score, and the devtools lock.
//!
//! Everything in this module is plain Rust with no browser types so the whole
//! machine can be exercised by native `cargo test`. The wasm layers (`app`,
//! `view`, `devtools`) drive it through the small transition methods below and
//! render from whatever state results.

use crate::episodes::Frame;

/// Number of episodes a frame can come from; guess buttons are generated
/// for labels `ep1` ..= `ep<EPISODE_COUNT>`.
pub const EPISODE_COUNT: u32 = 12;

/// Score value pinned while the devtools lock is active.
pub const LOCKED_SCORE: i64 = -999_999_999;

/// Fixed prefix of every episode label (`ep7`, `ep12`, ...).
pub const EPISODE_PREFIX: &str = "ep";

/// Build the canonical label for an episode number.
pub fn episode_label(n: u32) -> String {
    format!("{EPISODE_PREFIX}{n}")
}

/// Strip the fixed prefix from a stored label, yielding the display number
/// ("ep5" -> "5"). Labels shorter than the prefix are returned unchanged.
pub fn episode_number(label: &str) -> &str {
    label.strip_prefix(EPISODE_PREFIX).unwrap_or(label)
}

/// Uniform random index in `0..len` (0 when `len == 0`).
/// Modulo bias over a 64-bit draw is negligible for the tiny ranges used here.
pub fn rand_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_err() {
        return 0;
    }
    (u64::from_le_bytes(buf) % len as u64) as usize
}

/// Uniform random episode number in 1..=EPISODE_COUNT.
pub fn random_episode() -> u32 {
    rand_index(EPISODE_COUNT as usize) as u32 + 1
}

// --- Round / session state ---------------------------------------------------

/// Phase of the current round. The lock is deliberately NOT a phase: it is an
/// orthogonal session flag so a detection mid-round preempts any phase and a
/// reset can resume cleanly from `Loading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// A dataset fetch is (or should be) in flight; no frame to guess at.
    Loading,
    /// A frame is displayed and one guess will be accepted. Also the rest
    /// state after a failed load, in which case `current` is `None` and the
    /// view offers only the retry control.
    Ready,
    /// The single guess for this round has been spent.
    Answered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
}

/// Whole-game state: one round plus the cumulative session score and lock.
#[derive(Debug)]
pub struct QuizState {
    pub score: i64,
    pub phase: RoundPhase,
    pub current: Option<Frame>,
    pub outcome: Option<GuessOutcome>,
    pub locked: bool,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    /// Fresh session. Starts in `Ready` with no frame (the same rest state a
    /// failed load settles in) so the first `begin_round()` is accepted.
    pub fn new() -> Self {
        Self {
            score: 0,
            phase: RoundPhase::Ready,
            current: None,
            outcome: None,
            locked: false,
        }
    }

    /// Enter `Loading` for a fresh round, discarding the previous frame and
    /// outcome. Returns `false` (and changes nothing) while locked or while a
    /// load is already in flight, so at most one fetch is ever outstanding.
    pub fn begin_round(&mut self) -> bool {
        if self.locked || self.phase == RoundPhase::Loading {
            return false;
        }
        self.current = None;
        self.outcome = None;
        self.phase = RoundPhase::Loading;
        true
    }

    /// Deliver the frame chosen from a freshly fetched dataset. Stale
    /// completions (lock fired, or no load in flight) are dropped.
    pub fn round_loaded(&mut self, frame: Frame) {
        if self.locked || self.phase != RoundPhase::Loading {
            return;
        }
        self.current = Some(frame);
        self.outcome = None;
        self.phase = RoundPhase::Ready;
    }

    /// A fetch ended without producing a dataset. The round settles in
    /// `Ready` with no frame: guesses stay no-ops and the view shows only
    /// the retry control. No automatic retry.
    pub fn round_failed(&mut self) {
        if self.locked || self.phase != RoundPhase::Loading {
            return;
        }
        self.current = None;
        self.outcome = None;
        self.phase = RoundPhase::Ready;
    }

    /// Evaluate one guess against the current frame.
    ///
    /// Ignored entirely (returns `None`) while locked, outside `Ready`, or
    /// with no current frame. A mismatch is a normal outcome, not an error:
    /// it resets the score to 0 while a match increments it by 1. Either way
    /// the round moves to `Answered`, spending the single allowed guess.
    pub fn handle_guess(&mut self, guess_label: &str) -> Option<GuessOutcome> {
        if self.locked || self.phase != RoundPhase::Ready {
            return None;
        }
        let current = self.current.as_ref()?;
        let outcome = if guess_label == current.episode {
            self.score += 1;
            GuessOutcome::Correct
        } else {
            self.score = 0;
            GuessOutcome::Wrong
        };
        self.outcome = Some(outcome);
        self.phase = RoundPhase::Answered;
        Some(outcome)
    }

    /// Engage the devtools lock, pinning the score. Idempotent: returns
    /// `true` only on the transition, `false` when already locked.
    pub fn lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        self.score = LOCKED_SCORE;
        true
    }

    /// Explicit player reset out of the locked state: clears the lock and the
    /// score. The caller is expected to follow up with `begin_round()`.
    pub fn unlock(&mut self) {
        self.locked = false;
        self.score = 0;
        self.current = None;
        self.outcome = None;
        self.phase = RoundPhase::Ready;
    }
}
