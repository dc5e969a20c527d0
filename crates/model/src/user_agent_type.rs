use serde::{Deserialize, Serialize};

/// Classification of a detected client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAgentType {
    Browser,
    EmailClient,
    FeedReader,
    Library,
    MediaPlayer,
    MobileBrowser,
    OfflineBrowser,
    Other,
    Robot,
    #[default]
    Unknown,
    UseragentAnonymizer,
    Validator,
    WapBrowser,
}

impl UserAgentType {
    pub const ALL: [UserAgentType; 13] = [
        UserAgentType::Browser,
        UserAgentType::EmailClient,
        UserAgentType::FeedReader,
        UserAgentType::Library,
        UserAgentType::MediaPlayer,
        UserAgentType::MobileBrowser,
        UserAgentType::OfflineBrowser,
        UserAgentType::Other,
        UserAgentType::Robot,
        UserAgentType::Unknown,
        UserAgentType::UseragentAnonymizer,
        UserAgentType::Validator,
        UserAgentType::WapBrowser,
    ];

    /// Human readable type name as found in detection data. `Unknown` has none.
    pub fn name(self) -> &'static str {
        match self {
            UserAgentType::Browser => "Browser",
            UserAgentType::EmailClient => "Email client",
            UserAgentType::FeedReader => "Feed Reader",
            UserAgentType::Library => "Library",
            UserAgentType::MediaPlayer => "Multimedia Player",
            UserAgentType::MobileBrowser => "Mobile Browser",
            UserAgentType::OfflineBrowser => "Offline Browser",
            UserAgentType::Other => "Other",
            UserAgentType::Robot => "Robot",
            UserAgentType::Unknown => "",
            UserAgentType::UseragentAnonymizer => "Useragent Anonymizer",
            UserAgentType::Validator => "Validator",
            UserAgentType::WapBrowser => "Wap Browser",
        }
    }

    /// Map a type name back to its classification.
    ///
    /// Names are matched exactly; anything unrecognised is `Unknown`.
    pub fn evaluate_by_type_name(type_name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == type_name)
            .unwrap_or(UserAgentType::Unknown)
    }
}

impl core::fmt::Display for UserAgentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
