mod memory;
mod notifier;

pub use memory::*;
pub use notifier::*;
