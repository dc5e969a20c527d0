//! Version numbers as reported by user agents and operating systems.
//!
//! A version is an ordered list of groups ("3", "6", "13") plus a free-form
//! extension (" beta", "-rc1"). Groups stay text so odd vendor schemes survive
//! a round trip untouched.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uaprobe_core::ValueObject;

/// Separator between version groups.
pub const SEPARATOR: char = '.';

/// Version number value object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionNumber {
    groups: Vec<String>,
    extension: String,
}

impl VersionNumber {
    /// Sentinel for "no version detected". Renders as an empty string.
    pub const UNKNOWN: VersionNumber = VersionNumber {
        groups: Vec::new(),
        extension: String::new(),
    };

    /// Create a version from its groups, without extension.
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_extension(groups, String::new())
    }

    pub fn with_extension<I, S>(groups: I, extension: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            extension: extension.into(),
        }
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn major(&self) -> &str {
        self.group(0)
    }

    pub fn minor(&self) -> &str {
        self.group(1)
    }

    pub fn bugfix(&self) -> &str {
        self.group(2)
    }

    /// Whether this is the [`VersionNumber::UNKNOWN`] sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Canonical rendering: groups joined by `.`, followed by the extension.
    pub fn to_version_string(&self) -> String {
        let mut out = self.groups.join(".");
        out.push_str(&self.extension);
        out
    }

    fn group(&self, index: usize) -> &str {
        self.groups.get(index).map(String::as_str).unwrap_or("")
    }
}

impl ValueObject for VersionNumber {}

impl core::fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_version_string())
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.groups.len().max(other.groups.len());
        (0..len)
            .map(|i| compare_groups(self.groups.get(i), other.groups.get(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.extension.cmp(&other.extension))
            // Keeps `Ord` consistent with `Eq` when groups are numerically equal
            // but spelled differently ("1.0" vs "1.0.0", "01" vs "1").
            .then_with(|| self.groups.cmp(&other.groups))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Missing groups count as zero. All-digit groups compare by numeric value at
/// any length and sort before every other group; the rest compare as text.
fn compare_groups(a: Option<&String>, b: Option<&String>) -> Ordering {
    let a = a.map(String::as_str).unwrap_or("0");
    let b = b.map(String::as_str).unwrap_or("0");
    match (numeric_digits(a), numeric_digits(b)) {
        (Some(x), Some(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Significant digits of an all-digit group ("007" -> "7", "0" -> "").
fn numeric_digits(group: &str) -> Option<&str> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(group.trim_start_matches('0'))
}

/// Parse a version out of free text.
///
/// The first run of `digits(.digits)*` becomes the groups; whatever follows it,
/// trimmed on the right, becomes the extension. Text before the first digit is
/// dropped. Input without any digit yields no groups and the trimmed input as
/// extension. Parsing never fails.
pub fn parse_version(input: &str) -> VersionNumber {
    let Some(start) = input.find(|c: char| c.is_ascii_digit()) else {
        return VersionNumber::with_extension(Vec::<String>::new(), input.trim());
    };

    let candidate = &input[start..];
    let end = numeric_prefix_len(candidate);
    let (numbers, rest) = candidate.split_at(end);

    VersionNumber::with_extension(numbers.split(SEPARATOR), rest.trim_end())
}

/// Length of the leading `digits(.digits)*` run. A trailing dot is not part of it.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut i = 0;
    loop {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            break;
        }
        end = i;
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
        } else {
            break;
        }
    }
    end
}

impl FromStr for VersionNumber {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_version(s))
    }
}
