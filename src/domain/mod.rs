mod account;
mod error;
mod user;

pub use account::*;
pub use error::*;
pub use user::*;
