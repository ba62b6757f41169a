use crate::{Effect, Msg, RefreshState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every path that fetches goes through a fresh generation token, so a
/// settlement from an older trigger is dropped no matter when it arrives.
/// Once torn down, the state ignores every message.
pub fn update<O, T, E>(
    mut state: RefreshState<O, T, E>,
    msg: Msg<O, T, E>,
) -> (RefreshState<O, T, E>, Vec<Effect<O>>)
where
    O: Clone + PartialEq,
{
    if !state.is_alive() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => {
            let options = state.options().clone();
            vec![state.trigger(options)]
        }
        Msg::OptionsSupplied(options) => {
            if state.options_differ(&options) {
                vec![state.trigger(options)]
            } else {
                Vec::new()
            }
        }
        Msg::Trigger(options) => vec![state.trigger(options)],
        Msg::IntervalElapsed => {
            let options = state.options().clone();
            vec![state.trigger(options)]
        }
        Msg::Settled {
            generation,
            outcome,
        } => {
            state.settle(generation, outcome);
            Vec::new()
        }
        Msg::TornDown => {
            state.tear_down();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
