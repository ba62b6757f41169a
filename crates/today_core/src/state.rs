use crate::{Effect, RequestState};

/// Monotonically increasing token attached to every trigger. Only a
/// settlement carrying the latest token is allowed to touch the state.
pub type Generation = u64;

/// Refresh lifecycle for one data-display widget.
///
/// `O` is the options value, `T` the fetch result and `E` the fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshState<O, T, E> {
    options: O,
    request: RequestState<T, E>,
    generation: Generation,
    triggers: u64,
    alive: bool,
    dirty: bool,
}

impl<O, T, E> RefreshState<O, T, E>
where
    O: Clone + PartialEq,
{
    /// Starts in `Loading` with no trigger issued yet; send `Msg::Mounted`
    /// to issue the first fetch.
    pub fn new(initial_options: O) -> Self {
        Self {
            options: initial_options,
            request: RequestState::Loading,
            generation: 0,
            triggers: 0,
            alive: true,
            dirty: false,
        }
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    pub fn request(&self) -> &RequestState<T, E> {
        &self.request
    }

    /// Token of the most recently issued trigger (0 before the first one).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of triggers issued so far.
    pub fn trigger_count(&self) -> u64 {
        self.triggers
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns whether the request state changed since the last call, and
    /// clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Resets to `Loading` and issues a fetch for `options` under a fresh
    /// generation token.
    pub(crate) fn trigger(&mut self, options: O) -> Effect<O> {
        self.options = options.clone();
        self.generation += 1;
        self.triggers += 1;
        self.request.begin();
        self.dirty = true;
        Effect::Fetch {
            generation: self.generation,
            options,
        }
    }

    /// Returns true when `candidate` differs structurally from the options
    /// used last.
    pub(crate) fn options_differ(&self, candidate: &O) -> bool {
        self.options != *candidate
    }

    pub(crate) fn settle(&mut self, generation: Generation, outcome: Result<T, E>) -> bool {
        if !self.alive || generation != self.generation {
            return false;
        }
        let applied = self.request.settle(outcome);
        self.dirty |= applied;
        applied
    }

    pub(crate) fn tear_down(&mut self) {
        self.alive = false;
    }
}
