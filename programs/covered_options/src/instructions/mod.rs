pub mod create_option;
pub mod exercise;
pub mod expire;
pub mod initialize_registry;
pub mod queries;
pub mod transfer_claim;
pub mod unwind;
pub mod write_option;

// Note: Glob imports are required for Anchor's #[program] macro
// The handler name collision is intentional - each module's handler is accessed via module path
#[allow(ambiguous_glob_reexports)]
pub use create_option::*;
#[allow(ambiguous_glob_reexports)]
pub use exercise::*;
#[allow(ambiguous_glob_reexports)]
pub use expire::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_registry::*;
#[allow(ambiguous_glob_reexports)]
pub use queries::*;
#[allow(ambiguous_glob_reexports)]
pub use transfer_claim::*;
#[allow(ambiguous_glob_reexports)]
pub use unwind::*;
#[allow(ambiguous_glob_reexports)]
pub use write_option::*;
