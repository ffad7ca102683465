mod bus;
mod debounce;
mod events;

pub use bus::{Callbacks, ListenerId};
pub use debounce::Debouncer;
pub use events::ModelChange;
