use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<O> {
    /// Run the fetch capability with `options` and report back as
    /// `Msg::Settled { generation, .. }`.
    Fetch { generation: Generation, options: O },
}
