//! Validating builder for [`UserAgent`].
//!
//! Setters take `impl Into<Option<T>>`, so detection code can forward values
//! straight from a lookup (`Option<&str>`) while hand-written code passes plain
//! values. An absent value is rejected with `DomainError::InvalidArgument` and
//! leaves the builder untouched.

use uaprobe_core::{DomainError, DomainResult};

use crate::operating_system::{OperatingSystem, ReadableOperatingSystem};
use crate::user_agent::UserAgent;
use crate::user_agent_type::UserAgentType;
use crate::version::VersionNumber;

/// Mutable accumulator for a [`UserAgent`].
///
/// Starts out holding the [`UserAgent::EMPTY`] values and stays usable after
/// [`build`](Self::build), so one builder can stamp out several descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentBuilder {
    family: String,
    name: String,
    operating_system: OperatingSystem,
    producer: String,
    producer_url: String,
    user_agent_type: UserAgentType,
    type_name: String,
    url: String,
    version_number: VersionNumber,
}

impl Default for UserAgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentBuilder {
    pub fn new() -> Self {
        let UserAgent {
            family,
            name,
            operating_system,
            producer,
            producer_url,
            user_agent_type,
            type_name,
            url,
            version_number,
        } = UserAgent::EMPTY;

        Self {
            family,
            name,
            operating_system,
            producer,
            producer_url,
            user_agent_type,
            type_name,
            url,
            version_number,
        }
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

    pub fn set_family<'a>(
        &mut self,
        family: impl Into<Option<&'a str>>,
    ) -> DomainResult<&mut Self> {
        self.family = require("family", family.into())?.to_owned();
        Ok(self)
    }

    pub fn set_name<'a>(&mut self, name: impl Into<Option<&'a str>>) -> DomainResult<&mut Self> {
        self.name = require("name", name.into())?.to_owned();
        Ok(self)
    }

    pub fn set_operating_system(
        &mut self,
        operating_system: impl Into<Option<OperatingSystem>>,
    ) -> DomainResult<&mut Self> {
        self.operating_system = require("operating_system", operating_system.into())?;
        Ok(self)
    }

    /// Adopt a foreign operating system descriptor.
    ///
    /// The descriptor is copied into a concrete [`OperatingSystem`]. Fails when
    /// the descriptor is absent or does not know its family.
    pub fn set_operating_system_from(
        &mut self,
        operating_system: Option<&dyn ReadableOperatingSystem>,
    ) -> DomainResult<&mut Self> {
        let readable = require("operating_system", operating_system)?;
        self.operating_system = OperatingSystem::from_readable(readable).inspect_err(|err| {
            tracing::debug!(
                argument = "operating_system",
                error = %err,
                "rejected user agent builder argument"
            );
        })?;
        Ok(self)
    }

    pub fn set_producer<'a>(
        &mut self,
        producer: impl Into<Option<&'a str>>,
    ) -> DomainResult<&mut Self> {
        self.producer = require("producer", producer.into())?.to_owned();
        Ok(self)
    }

    pub fn set_producer_url<'a>(
        &mut self,
        producer_url: impl Into<Option<&'a str>>,
    ) -> DomainResult<&mut Self> {
        self.producer_url = require("producer_url", producer_url.into())?.to_owned();
        Ok(self)
    }

    pub fn set_type(
        &mut self,
        user_agent_type: impl Into<Option<UserAgentType>>,
    ) -> DomainResult<&mut Self> {
        self.user_agent_type = require("type", user_agent_type.into())?;
        Ok(self)
    }

    pub fn set_type_name<'a>(
        &mut self,
        type_name: impl Into<Option<&'a str>>,
    ) -> DomainResult<&mut Self> {
        self.type_name = require("type_name", type_name.into())?.to_owned();
        Ok(self)
    }

    pub fn set_url<'a>(&mut self, url: impl Into<Option<&'a str>>) -> DomainResult<&mut Self> {
        self.url = require("url", url.into())?.to_owned();
        Ok(self)
    }

    pub fn set_version_number(
        &mut self,
        version_number: impl Into<Option<VersionNumber>>,
    ) -> DomainResult<&mut Self> {
        self.version_number = require("version_number", version_number.into())?;
        Ok(self)
    }

    /// Snapshot the current slots into a new [`UserAgent`].
    pub fn build(&self) -> UserAgent {
        tracing::trace!(family = %self.family, name = %self.name, "building user agent");

        UserAgent {
            family: self.family.clone(),
            name: self.name.clone(),
            operating_system: self.operating_system.clone(),
            producer: self.producer.clone(),
            producer_url: self.producer_url.clone(),
            user_agent_type: self.user_agent_type,
            type_name: self.type_name.clone(),
            url: self.url.clone(),
            version_number: self.version_number.clone(),
        }
    }
}

impl From<&UserAgent> for UserAgentBuilder {
    fn from(user_agent: &UserAgent) -> Self {
        let user_agent = user_agent.clone();
        Self {
            family: user_agent.family,
            name: user_agent.name,
            operating_system: user_agent.operating_system,
            producer: user_agent.producer,
            producer_url: user_agent.producer_url,
            user_agent_type: user_agent.user_agent_type,
            type_name: user_agent.type_name,
            url: user_agent.url,
            version_number: user_agent.version_number,
        }
    }
}

fn require<T>(argument: &'static str, value: Option<T>) -> DomainResult<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument, "rejected user agent builder argument");
        DomainError::missing(argument)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parse_version;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    /// Mock descriptor whose accessors return fixed values.
    struct StubOs {
        family: Option<&'static str>,
        version: VersionNumber,
    }

    impl StubOs {
        fn with_family(family: Option<&'static str>) -> Self {
            Self {
                family,
                version: VersionNumber::new(["1", "0"]),
            }
        }
    }

    impl ReadableOperatingSystem for StubOs {
        fn family(&self) -> Option<&str> {
            self.family
        }

        fn name(&self) -> Option<&str> {
            Some("n1")
        }

        fn producer(&self) -> Option<&str> {
            Some("p1")
        }

        fn producer_url(&self) -> Option<&str> {
            Some("pu1")
        }

        fn url(&self) -> Option<&str> {
            Some("u1")
        }

        fn version_number(&self) -> Option<&VersionNumber> {
            Some(&self.version)
        }
    }

    fn addr(builder: &UserAgentBuilder) -> *const UserAgentBuilder {
        builder
    }

    fn os() -> OperatingSystem {
        OperatingSystem::new(
            "family",
            "name",
            "producer",
            "producer url",
            "url",
            VersionNumber::new(["1"]),
        )
    }

    fn assert_invalid_argument(result: DomainResult<&mut UserAgentBuilder>) {
        match result {
            Err(DomainError::InvalidArgument(_)) => {}
            Ok(_) => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn build_custom() {
        let mut b = UserAgentBuilder::new();
        let expected = addr(&b);

        let returned: *const UserAgentBuilder = b.set_family("f1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_name("n1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_operating_system(os()).unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_producer("p1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_producer_url("pu1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_type(UserAgentType::Browser).unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_type_name("t1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder = b.set_url("u1").unwrap();
        assert_eq!(returned, expected);
        let returned: *const UserAgentBuilder =
            b.set_version_number(parse_version("1.0.0")).unwrap();
        assert_eq!(returned, expected);

        assert_eq!(b.family(), "f1");
        assert_eq!(b.name(), "n1");
        assert_eq!(b.operating_system(), &os());
        assert_eq!(b.producer(), "p1");
        assert_eq!(b.producer_url(), "pu1");
        assert_eq!(b.user_agent_type(), UserAgentType::Browser);
        assert_eq!(b.type_name(), "t1");
        assert_eq!(b.url(), "u1");
        assert_eq!(b.version_number().to_version_string(), "1.0.0");

        let ua = b.build();
        assert_eq!(ua.family(), "f1");
        assert_eq!(ua.name(), "n1");
        assert_eq!(ua.operating_system(), &os());
        assert_eq!(ua.producer(), "p1");
        assert_eq!(ua.producer_url(), "pu1");
        assert_eq!(ua.user_agent_type(), UserAgentType::Browser);
        assert_eq!(ua.type_name(), "t1");
        assert_eq!(ua.url(), "u1");
        assert_eq!(ua.version_number().to_version_string(), "1.0.0");
    }

    #[test]
    fn setters_chain_with_question_mark() -> DomainResult<()> {
        let mut b = UserAgentBuilder::new();
        b.set_family("f1")?
            .set_name("n1")?
            .set_type(UserAgentType::Robot)?
            .set_url("u1")?;

        let ua = b.build();
        assert_eq!(ua.family(), "f1");
        assert_eq!(ua.user_agent_type(), UserAgentType::Robot);
        assert_eq!(ua.url(), "u1");
        Ok(())
    }

    #[test]
    fn build_empty() {
        let b = UserAgentBuilder::new();
        assert_eq!(b.family(), UserAgent::EMPTY.family());
        assert_eq!(b.name(), UserAgent::EMPTY.name());
        assert_eq!(b.operating_system(), UserAgent::EMPTY.operating_system());
        assert_eq!(b.producer(), UserAgent::EMPTY.producer());
        assert_eq!(b.producer_url(), UserAgent::EMPTY.producer_url());
        assert_eq!(b.user_agent_type(), UserAgent::EMPTY.user_agent_type());
        assert_eq!(b.type_name(), UserAgent::EMPTY.type_name());
        assert_eq!(b.url(), UserAgent::EMPTY.url());
        assert_eq!(b.version_number(), &VersionNumber::UNKNOWN);
        assert_eq!(b.build(), UserAgent::EMPTY);

        let ua = b.build();
        assert_eq!(ua, UserAgent::EMPTY);
        assert_eq!(ua.version_number(), &VersionNumber::UNKNOWN);
        assert_eq!(ua, UserAgentBuilder::default().build());
    }

    #[test]
    fn build_does_not_consume_or_mutate_builder() {
        let mut b = UserAgentBuilder::new();
        b.set_name("n1").unwrap();
        let before = b.clone();

        let first = b.build();
        let second = b.build();
        assert_eq!(first, second);
        assert_eq!(b, before);

        b.set_name("n2").unwrap();
        assert_eq!(first.name(), "n1");
        assert_eq!(b.build().name(), "n2");
    }

    #[test]
    fn builder_from_user_agent_round_trips() {
        let mut b = UserAgentBuilder::new();
        b.set_family("f1").unwrap().set_operating_system(os()).unwrap();
        let ua = b.build();

        assert_eq!(UserAgentBuilder::from(&ua), b);
        assert_eq!(UserAgentBuilder::from(&ua).build(), ua);
    }

    #[test]
    fn set_family_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_family(None));
    }

    #[test]
    fn set_name_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_name(None));
    }

    #[test]
    fn set_operating_system_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_operating_system(None));
    }

    #[test]
    fn set_operating_system_from_readable() {
        let stub = StubOs::with_family(Some("f1"));
        let mut b = UserAgentBuilder::new();
        b.set_operating_system_from(Some(&stub)).unwrap();

        let os = b.operating_system();
        assert_eq!(os.family(), "f1");
        assert_eq!(os.name(), "n1");
        assert_eq!(os.producer(), "p1");
        assert_eq!(os.producer_url(), "pu1");
        assert_eq!(os.url(), "u1");
        assert_eq!(os.version_number(), &VersionNumber::new(["1", "0"]));
    }

    #[test]
    fn set_operating_system_from_readable_without_family() {
        let stub = StubOs::with_family(None);
        assert_invalid_argument(UserAgentBuilder::new().set_operating_system_from(Some(&stub)));
    }

    #[test]
    fn set_operating_system_from_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_operating_system_from(None));
    }

    #[test]
    fn set_producer_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_producer(None));
    }

    #[test]
    fn set_producer_url_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_producer_url(None));
    }

    #[test]
    fn set_type_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_type(None));
    }

    #[test]
    fn set_type_name_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_type_name(None));
    }

    #[test]
    fn set_url_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_url(None));
    }

    #[test]
    fn set_version_number_none() {
        assert_invalid_argument(UserAgentBuilder::new().set_version_number(None));
    }

    fn fully_populated() -> UserAgentBuilder {
        let mut b = UserAgentBuilder::new();
        b.set_family("f1")
            .and_then(|b| b.set_name("n1"))
            .and_then(|b| b.set_operating_system(os()))
            .and_then(|b| b.set_producer("p1"))
            .and_then(|b| b.set_producer_url("pu1"))
            .and_then(|b| b.set_type(UserAgentType::Browser))
            .and_then(|b| b.set_type_name("t1"))
            .and_then(|b| b.set_url("u1"))
            .and_then(|b| b.set_version_number(parse_version("1.0.0")))
            .unwrap();
        b
    }

    #[test]
    fn rejected_setter_leaves_slots_untouched() {
        uaprobe_observability::init();

        let mut b = fully_populated();
        let before = b.clone();
        assert_ne!(before.build(), UserAgent::EMPTY);

        assert!(b.set_family(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_name(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_operating_system(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_operating_system_from(None).is_err());
        assert_eq!(b, before);
        assert!(
            b.set_operating_system_from(Some(&StubOs::with_family(None)))
                .is_err()
        );
        assert_eq!(b, before);
        assert!(b.set_producer(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_producer_url(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_type(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_type_name(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_url(None).is_err());
        assert_eq!(b, before);
        assert!(b.set_version_number(None).is_err());
        assert_eq!(b, before);

        assert_eq!(b.build(), before.build());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejections_are_logged_as_json() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = uaprobe_observability::tracing::subscriber(
            EnvFilter::new("debug"),
            move || writer.clone(),
        );

        tracing::subscriber::with_default(subscriber, || {
            let mut b = UserAgentBuilder::new();
            assert!(b.set_producer_url(None).is_err());
            assert!(
                b.set_operating_system_from(Some(&StubOs::with_family(None)))
                    .is_err()
            );
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"argument\":\"producer_url\""));
        assert!(lines[1].contains("\"argument\":\"operating_system\""));
        assert!(lines[1].contains("operating system family must be present"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every text setter reads back what it wrote.
            #[test]
            fn text_setters_read_back(
                family in ".{0,40}",
                name in ".{0,40}",
                producer in ".{0,40}",
                producer_url in ".{0,40}",
                type_name in ".{0,40}",
                url in ".{0,40}",
            ) {
                let mut b = UserAgentBuilder::new();
                b.set_family(family.as_str()).unwrap()
                    .set_name(name.as_str()).unwrap()
                    .set_producer(producer.as_str()).unwrap()
                    .set_producer_url(producer_url.as_str()).unwrap()
                    .set_type_name(type_name.as_str()).unwrap()
                    .set_url(url.as_str()).unwrap();

                prop_assert_eq!(b.family(), family.as_str());
                prop_assert_eq!(b.name(), name.as_str());
                prop_assert_eq!(b.producer(), producer.as_str());
                prop_assert_eq!(b.producer_url(), producer_url.as_str());
                prop_assert_eq!(b.type_name(), type_name.as_str());
                prop_assert_eq!(b.url(), url.as_str());

                let ua = b.build();
                prop_assert_eq!(ua.family(), family.as_str());
                prop_assert_eq!(ua.url(), url.as_str());
            }

            /// Property: type and type name setters accept every classification.
            #[test]
            fn type_setter_reads_back(index in 0usize..UserAgentType::ALL.len()) {
                let t = UserAgentType::ALL[index];
                let mut b = UserAgentBuilder::new();
                b.set_type(t).unwrap().set_type_name(t.name()).unwrap();

                let ua = b.build();
                prop_assert_eq!(ua.user_agent_type(), t);
                prop_assert_eq!(UserAgentType::evaluate_by_type_name(ua.type_name()), t);
            }
        }
    }
}
