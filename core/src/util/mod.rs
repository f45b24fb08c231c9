use std::sync::Once;

pub(crate) mod example_graphs;

static LOGGER_INIT: Once = Once::new();

/// Install the test logger once for the whole test binary.
pub(crate) fn init_logger() {
    LOGGER_INIT.call_once(env_logger::init);
}
