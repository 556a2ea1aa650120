pub mod analysis;
pub mod card;
pub mod catalog;
pub mod set;

pub use analysis::*;
pub use card::*;
pub use catalog::*;
pub use set::*;
