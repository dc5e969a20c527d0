use serde::{Deserialize, Serialize};

use uaprobe_core::{DomainError, DomainResult, ValueObject};

use crate::version::VersionNumber;

/// Read-only view of an operating system descriptor.
///
/// Lets callers hand foreign OS representations (detection results from another
/// library, rows from a lookup table) to the builder without converting them
/// first. Foreign sources may not know every field, so each accessor is
/// optional.
pub trait ReadableOperatingSystem {
    fn family(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn producer(&self) -> Option<&str>;
    fn producer_url(&self) -> Option<&str>;
    fn url(&self) -> Option<&str>;
    fn version_number(&self) -> Option<&VersionNumber>;
}

/// Operating system value object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatingSystem {
    family: String,
    name: String,
    producer: String,
    producer_url: String,
    url: String,
    version_number: VersionNumber,
}

impl OperatingSystem {
    /// Sentinel for "no operating system detected".
    pub const EMPTY: OperatingSystem = OperatingSystem {
        family: String::new(),
        name: String::new(),
        producer: String::new(),
        producer_url: String::new(),
        url: String::new(),
        version_number: VersionNumber::UNKNOWN,
    };

    pub fn new(
        family: impl Into<String>,
        name: impl Into<String>,
        producer: impl Into<String>,
        producer_url: impl Into<String>,
        url: impl Into<String>,
        version_number: VersionNumber,
    ) -> Self {
        Self {
            family: family.into(),
            name: name.into(),
            producer: producer.into(),
            producer_url: producer_url.into(),
            url: url.into(),
            version_number,
        }
    }

    /// Copy a foreign descriptor into a concrete value.
    ///
    /// The family is mandatory. Any other field the source does not know falls
    /// back to the value in [`OperatingSystem::EMPTY`].
    pub fn from_readable(os: &dyn ReadableOperatingSystem) -> DomainResult<Self> {
        let family = os
            .family()
            .ok_or_else(|| DomainError::missing("operating system family"))?;

        Ok(Self {
            family: family.to_owned(),
            name: os.name().unwrap_or_default().to_owned(),
            producer: os.producer().unwrap_or_default().to_owned(),
            producer_url: os.producer_url().unwrap_or_default().to_owned(),
            url: os.url().unwrap_or_default().to_owned(),
            version_number: os
                .version_number()
                .cloned()
                .unwrap_or(VersionNumber::UNKNOWN),
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn producer_url(&self) -> &str {
        &self.producer_url
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

impl ValueObject for OperatingSystem {}

impl ReadableOperatingSystem for OperatingSystem {
    fn family(&self) -> Option<&str> {
        Some(&self.family)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn producer(&self) -> Option<&str> {
        Some(&self.producer)
    }

    fn producer_url(&self) -> Option<&str> {
        Some(&self.producer_url)
    }

    fn url(&self) -> Option<&str> {
        Some(&self.url)
    }

    fn version_number(&self) -> Option<&VersionNumber> {
        Some(&self.version_number)
    }
}

impl core::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)?;
        if !self.version_number.is_unknown() {
            write!(f, " {}", self.version_number)?;
        }
        Ok(())
    }
}
