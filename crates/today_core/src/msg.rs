use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg<O, T, E> {
    /// The widget was mounted; fetch once with the initial options.
    Mounted,
    /// New options arrived from outside. Only a structural change fetches.
    OptionsSupplied(O),
    /// Explicit trigger with the given options, regardless of equality.
    Trigger(O),
    /// The periodic refresh interval elapsed.
    IntervalElapsed,
    /// A fetch issued under `generation` finished.
    Settled {
        generation: Generation,
        outcome: Result<T, E>,
    },
    /// The owning widget was destroyed.
    TornDown,
    /// Fallback for placeholder wiring.
    NoOp,
}
