//! User agent descriptor model.
//!
//! This crate holds the value objects a detector hands back once it has
//! classified a client (`UserAgent`, `OperatingSystem`, `VersionNumber`) plus
//! the validating builder used to assemble them. It is pure domain logic: no
//! header parsing, no detection database, no IO.

pub mod builder;
pub mod operating_system;
pub mod user_agent;
pub mod user_agent_type;
pub mod version;

pub use builder::UserAgentBuilder;
pub use operating_system::{OperatingSystem, ReadableOperatingSystem};
pub use user_agent::UserAgent;
pub use user_agent_type::UserAgentType;
pub use version::{VersionNumber, parse_version};
