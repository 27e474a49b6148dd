pub mod accounts;
pub mod math;
pub mod pda;
pub mod symbol;
pub mod transfer;
pub mod validation;

pub use accounts::*;
pub use math::*;
pub use pda::*;
pub use symbol::*;
pub use transfer::*;
pub use validation::*;
