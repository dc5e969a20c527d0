use serde::{Deserialize, Serialize};

use uaprobe_core::ValueObject;

use crate::builder::UserAgentBuilder;
use crate::operating_system::OperatingSystem;
use crate::user_agent_type::UserAgentType;
use crate::version::VersionNumber;

/// Immutable description of a detected client.
///
/// Construct through [`UserAgentBuilder`]; once built, a descriptor never
/// changes. Equality and hashing compare every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAgent {
    pub(crate) family: String,
    pub(crate) name: String,
    pub(crate) operating_system: OperatingSystem,
    pub(crate) producer: String,
    pub(crate) producer_url: String,
    #[serde(rename = "type")]
    pub(crate) user_agent_type: UserAgentType,
    pub(crate) type_name: String,
    pub(crate) url: String,
    pub(crate) version_number: VersionNumber,
}

impl UserAgent {
    /// Sentinel for "nothing detected". Equal to the output of an untouched builder.
    pub const EMPTY: UserAgent = UserAgent {
        family: String::new(),
        name: String::new(),
        operating_system: OperatingSystem::EMPTY,
        producer: String::new(),
        producer_url: String::new(),
        user_agent_type: UserAgentType::Unknown,
        type_name: String::new(),
        url: String::new(),
        version_number: VersionNumber::UNKNOWN,
    };

    pub fn builder() -> UserAgentBuilder {
        UserAgentBuilder::new()
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operating_system(&self) -> &OperatingSystem {
        &self.operating_system
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn producer_url(&self) -> &str {
        &self.producer_url
    }

    pub fn user_agent_type(&self) -> UserAgentType {
        self.user_agent_type
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn version_number(&self) -> &VersionNumber {
        &self.version_number
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl ValueObject for UserAgent {}

impl core::fmt::Display for UserAgent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)?;
        if !self.version_number.is_unknown() {
            write!(f, " {}", self.version_number)?;
        }
        if !self.operating_system.is_empty() {
            write!(f, " on {}", self.operating_system)?;
        }
        Ok(())
    }
}
