//! View state for the query submission widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `QueryState` is provided via Leptos context and mutated by the
//! form component and the polling task. The generation counter is the
//! guard against overlapping submissions: every `begin` invalidates
//! all outcomes from earlier poll chains.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// UI-visible mode of the query widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryPhase {
    #[default]
    Idle,
    Loading,
    Errored,
    Completed,
}

/// State for one query interaction.
///
/// Replaced wholesale on each submission; no history is retained.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub phase: QueryPhase,
    /// Last error message, shown while `phase == Errored`.
    pub error: Option<String>,
    /// Last answer markdown, shown while `phase == Completed`.
    pub answer: Option<String>,
    /// Generation of the submission currently allowed to report.
    generation: u64,
}

impl QueryState {
    /// Start a new submission: clear prior outcome, enter `Loading`,
    /// and return the generation token the new flow must present when
    /// reporting back.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = QueryPhase::Loading;
        self.error = None;
        self.answer = None;
        self.generation
    }

    /// Invalidate any in-flight flow without starting a new one.
    ///
    /// Used on widget teardown so a pending poll timer wakes up to a
    /// stale generation and stops. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Record a successful answer, ignored unless `generation` is
    /// current.
    pub fn complete(&mut self, generation: u64, answer: String) {
        if generation != self.generation {
            return;
        }
        self.phase = QueryPhase::Completed;
        self.answer = Some(answer);
        self.error = None;
    }

    /// Record a terminal error, ignored unless `generation` is current.
    pub fn fail(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.phase = QueryPhase::Errored;
        self.error = Some(message);
        self.answer = None;
    }

    /// Whether `generation` is still the live submission.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
