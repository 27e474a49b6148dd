pub mod claim_ledger;
pub mod option_instance;
pub mod registry;

pub use claim_ledger::*;
pub use option_instance::*;
pub use registry::*;
