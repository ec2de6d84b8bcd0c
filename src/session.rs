use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::countdown::{Countdown, CountdownStatus};
use crate::language::Vocabulary;
use crate::word_set::{WordMode, WordSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Words visible, typing ignored until started.
    Idle,
    /// Countdown live, keystrokes accepted.
    Running,
    /// Time ran out or every word was committed.
    Finished,
}

/// A keystroke as the session understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Space,
    Backspace,
    Char(char),
    Other,
}

/// Feedback for one letter of the active word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Incorrect,
    Cursor,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub char: char,
    pub mark: Mark,
}

/// How a word of the set should be shown right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordView {
    Completed,
    Active(Vec<Letter>),
    Pending,
}

/// End-of-session numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub correct: usize,
    pub total: usize,
    pub attempted: usize,
    pub elapsed: Duration,
}

impl Summary {
    /// Share of committed words that were right, in percent.
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            ((self.correct as f64 / self.attempted as f64) * 100.0).round()
        }
    }

    /// Correct words per minute of elapsed time.
    pub fn wpm(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            (self.correct as f64 * 60.0 / secs).round()
        }
    }
}

/// One typing run: the word set, the countdown and everything typed so far.
///
/// All state lives here and is only touched through `&mut self`, one event at
/// a time. Every transition that leaves `Running` cancels the countdown.
#[derive(Debug)]
pub struct TypingSession {
    mode: WordMode,
    vocabulary: Vocabulary,
    words: WordSet,
    countdown: Countdown,
    active_word: usize,
    input: String,
    correct_count: usize,
    phase: Phase,
    started_at: Option<Instant>,
    /// Frozen when the session finishes.
    elapsed: Option<Duration>,
    rng: StdRng,
}

impl TypingSession {
    pub fn new(vocabulary: Vocabulary, mode: WordMode, duration_secs: u32) -> Self {
        Self::with_rng(
            vocabulary,
            mode,
            Countdown::new(duration_secs),
            StdRng::from_entropy(),
        )
    }

    /// Full control over the countdown and the random source, for
    /// deterministic runs.
    pub fn with_rng(vocabulary: Vocabulary, mode: WordMode, countdown: Countdown, mut rng: StdRng) -> Self {
        let words = WordSet::generate(&vocabulary, mode, &mut rng);
        let mut session = Self {
            mode,
            vocabulary,
            words,
            countdown,
            active_word: 0,
            input: String::new(),
            correct_count: 0,
            phase: Phase::Idle,
            started_at: None,
            elapsed: None,
            rng,
        };
        session.countdown.reset();
        session
    }

    pub fn mode(&self) -> WordMode {
        self.mode
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn active_word_index(&self) -> usize {
        self.active_word
    }

    pub fn current_input(&self) -> &str {
        &self.input
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn active_word(&self) -> Option<&str> {
        self.words.get(self.active_word)
    }

    /// 1-based position of the active word, clamped to the set length once
    /// every word has been committed.
    pub fn progress(&self) -> (usize, usize) {
        ((self.active_word + 1).min(self.words.len()), self.words.len())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            correct: self.correct_count,
            total: self.words.len(),
            attempted: self.active_word,
            elapsed: self
                .elapsed
                .or_else(|| self.started_at.map(|t| t.elapsed()))
                .unwrap_or_default(),
        }
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "start ignored");
            return;
        }

        self.active_word = 0;
        self.correct_count = 0;
        self.input.clear();
        self.countdown.arm(now);
        self.started_at = Some(now);
        self.elapsed = None;
        self.phase = Phase::Running;
        tracing::info!(mode = %self.mode, secs = self.countdown.duration_secs(), "session started");
    }

    /// Back to Idle with a fresh word set of the current mode.
    pub fn restart(&mut self) {
        self.countdown.reset();
        self.words = WordSet::generate(&self.vocabulary, self.mode, &mut self.rng);
        self.active_word = 0;
        self.correct_count = 0;
        self.input.clear();
        self.started_at = None;
        self.elapsed = None;
        self.phase = Phase::Idle;
        tracing::debug!(mode = %self.mode, "session reset");
    }

    /// Same as [`restart`](Self::restart) but with a new word count.
    pub fn change_mode(&mut self, mode: WordMode) {
        self.mode = mode;
        self.restart();
    }

    pub fn handle_key(&mut self, key: Keystroke) {
        self.handle_key_at(key, Instant::now());
    }

    /// Applies a keystroke that arrived at `now`; `now` only matters when
    /// the keystroke commits the last word.
    pub fn handle_key_at(&mut self, key: Keystroke, now: Instant) {
        if self.phase != Phase::Running {
            return;
        }

        match key {
            Keystroke::Space => self.commit_word(now),
            Keystroke::Backspace => {
                self.input.pop();
            }
            Keystroke::Char(c) => self.input.push(c),
            Keystroke::Other => {}
        }
    }

    /// Applies whatever countdown ticks are due at `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if self.phase != Phase::Running {
            return;
        }

        if let CountdownStatus::Expired = self.countdown.poll(now) {
            // the run lasted exactly the countdown, however late we noticed
            let elapsed = self.countdown.run_length();
            self.finish("time up", elapsed);
        }
    }

    /// Time until the countdown next needs a wakeup.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.countdown.time_until_tick(now)
    }

    /// Render state of word `idx`.
    pub fn word_view(&self, idx: usize) -> WordView {
        use std::cmp::Ordering;

        match idx.cmp(&self.active_word) {
            Ordering::Less => WordView::Completed,
            Ordering::Greater => WordView::Pending,
            Ordering::Equal => match self.active_word() {
                Some(target) => WordView::Active(self.letters(target)),
                None => WordView::Pending,
            },
        }
    }

    fn letters(&self, target: &str) -> Vec<Letter> {
        let typed: Vec<char> = self.input.chars().collect();
        let mut letters: Vec<Letter> = target
            .chars()
            .enumerate()
            .map(|(pos, char)| {
                let mark = match typed.get(pos) {
                    Some(&t) if t == char => Mark::Correct,
                    Some(_) => Mark::Incorrect,
                    None if pos == typed.len() => Mark::Cursor,
                    None => Mark::Pending,
                };
                Letter { char, mark }
            })
            .collect();

        // overflow past the target never matches
        letters.extend(typed.iter().skip(letters.len()).map(|&char| Letter {
            char,
            mark: Mark::Incorrect,
        }));

        letters
    }

    fn commit_word(&mut self, now: Instant) {
        let Some(target) = self.words.get(self.active_word) else {
            return;
        };

        let correct = self.input.trim() == target;
        if correct {
            self.correct_count += 1;
        }
        tracing::trace!(idx = self.active_word, correct, "word committed");

        self.active_word += 1;
        self.input.clear();

        if self.active_word == self.words.len() {
            let elapsed = self
                .started_at
                .map(|t| now.saturating_duration_since(t))
                .unwrap_or_default();
            self.finish("all words committed", elapsed);
        }
    }

    fn finish(&mut self, reason: &str, elapsed: Duration) {
        self.countdown.cancel();
        self.elapsed = Some(elapsed);
        self.phase = Phase::Finished;
        let summary = self.summary();
        tracing::info!(
            reason,
            correct = summary.correct,
            total = summary.total,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "session finished"
        );
    }
}
