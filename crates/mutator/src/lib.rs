mod coerce;
mod error;
mod event;
mod mode;
mod mutator;

pub use coerce::coerce_value;
pub use error::{MissingKey, MutateError};
pub use event::{EventSink, MutationEvent};
pub use mode::{Mutation, MutationMode};
pub use mutator::PathMutator;
