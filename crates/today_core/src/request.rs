/// Coarse label for a [`RequestState`], mirroring what a renderer switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Loading,
    Complete,
    Error,
}

/// Outcome of the most recent trigger.
///
/// Payloads live inside the variants, so `Complete` can never carry an error
/// and `Error` can never carry data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState<T, E> {
    #[default]
    Loading,
    Complete(T),
    Error(E),
}

impl<T, E> RequestState<T, E> {
    pub fn status(&self) -> Status {
        match self {
            RequestState::Loading => Status::Loading,
            RequestState::Complete(_) => Status::Complete,
            RequestState::Error(_) => Status::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Complete(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            RequestState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Resets to `Loading`, discarding any previous payload.
    pub fn begin(&mut self) {
        *self = RequestState::Loading;
    }

    /// `Loading -> Complete`. Returns false (and leaves the state alone) from
    /// any other state.
    pub fn complete(&mut self, data: T) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = RequestState::Complete(data);
        true
    }

    /// `Loading -> Error`. Returns false (and leaves the state alone) from
    /// any other state.
    pub fn fail(&mut self, error: E) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = RequestState::Error(error);
        true
    }

    /// Applies a fetch outcome with [`complete`](Self::complete) or
    /// [`fail`](Self::fail).
    pub fn settle(&mut self, outcome: Result<T, E>) -> bool {
        match outcome {
            Ok(data) => self.complete(data),
            Err(error) => self.fail(error),
        }
    }
}
