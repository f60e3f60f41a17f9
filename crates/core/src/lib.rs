pub mod config;
pub mod error;
pub mod intent;
pub mod publish;
pub mod record;
pub mod store;

// Re-export the common types for convenience
pub use config::Config;
pub use error::Error;
pub use intent::Intent;
pub use record::VersionRecord;
