mod notifier;
mod store;

pub use notifier::*;
pub use store::*;
