use approx::assert_relative_eq;
use npf::{npf_rule, ParameterStore};

/// Build a store and feed it a sequence of actions.
pub fn store_after<I, A>(actions: I) -> ParameterStore
where
    I: IntoIterator<Item = A>,
    A: Into<npf::Action>,
{
    let mut store = ParameterStore::new();
    for action in actions {
        store.dispatch(action);
    }
    store
}

/// The cached exposure time must always match a fresh derivation.
pub fn assert_exposure_consistent(store: &ParameterStore) {
    assert_relative_eq!(
        store.exposure_time(),
        npf_rule::exposure_time(&store.parameters()),
        max_relative = 1e-15
    );
}
