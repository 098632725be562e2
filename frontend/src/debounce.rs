//! Debounced search term: collapse a burst of keystrokes into one committed
//! query term after a quiet period.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Quiet period between the last keystroke and the committed query.
pub const QUIET_PERIOD_MS: u32 = 300;

/// The debounce decision logic, kept free of timers so it can be tested
/// directly. Every input bumps the generation; a timer that went to sleep for
/// an older generation finds itself superseded and commits nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebounceState {
    term: String,
    generation: u64,
    cancelled: bool,
}

impl DebounceState {
    /// Records a new term and returns the generation a timer must present
    /// back to [`DebounceState::commit`].
    pub fn note_input(&mut self, new_term: String) -> u64 {
        self.term = new_term;
        self.generation += 1;
        self.generation
    }

    /// The term to query, but only if `generation` is still the latest and
    /// the owner has not been torn down.
    pub fn commit(&self, generation: u64) -> Option<String> {
        if self.cancelled || generation != self.generation {
            return None;
        }
        Some(self.term.clone())
    }

    /// Teardown: no generation commits after this.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn current_term(&self) -> &str {
        &self.term
    }
}

/// Handle returned by [`use_debounced_term`]: feed it raw input events, watch
/// the committed term from a resource.
#[derive(Clone, Copy)]
pub struct DebouncedTerm {
    state: Signal<DebounceState>,
    committed: Signal<String>,
    pending: Signal<Option<Task>>,
    quiet_ms: u32,
}

impl DebouncedTerm {
    /// Replaces the current term, cancels any pending timer and schedules a
    /// fresh one. No query is issued synchronously.
    pub fn on_input(&mut self, new_term: String) {
        let generation = self.state.write().note_input(new_term);
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }

        let state = self.state;
        let mut committed = self.committed;
        let mut pending = self.pending;
        let quiet_ms = self.quiet_ms;
        let task = spawn(async move {
            TimeoutFuture::new(quiet_ms).await;
            pending.set(None);
            if let Some(term) = state.peek().commit(generation) {
                committed.set(term);
            }
        });
        self.pending.set(Some(task));
    }

    /// The term as typed, for the input box value.
    pub fn typed_term(&self) -> String {
        self.state.read().current_term().to_string()
    }

    /// The last committed term; changes exactly once per pause in typing.
    pub fn committed_term(&self) -> ReadSignal<String> {
        self.committed.into()
    }
}

/// Debounced term state for one component. Dropping the component cancels any
/// pending timer, so a timer can never fire into a torn-down scope.
pub fn use_debounced_term(quiet_ms: u32) -> DebouncedTerm {
    let mut state = use_signal(DebounceState::default);
    let committed = use_signal(String::new);
    let mut pending = use_signal(|| None::<Task>);

    use_drop(move || {
        state.write().cancel();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
    });

    DebouncedTerm {
        state,
        committed,
        pending,
        quiet_ms,
    }
}
