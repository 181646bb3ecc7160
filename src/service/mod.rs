mod transfer;
mod withdraw;

pub use transfer::*;
pub use withdraw::*;
