// Service exports
pub mod board;
pub mod demo;
pub mod loader;
pub mod store;

pub use board::MatchBoard;
pub use demo::seed_demo_profiles;
pub use loader::{drafts_from_value, parse_profiles};
pub use store::ProfileStore;
