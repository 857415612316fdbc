mod conversation;
mod generation_outcome;
mod instruction;
mod query;

pub use conversation::*;
pub use generation_outcome::*;
pub use instruction::*;
pub use query::*;
