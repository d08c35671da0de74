// Pipeline Configuration Domain Model

use super::driver::DriverOptions;
use super::error::{DomainError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Option keys owned by the configuration itself; never valid as driver options.
pub const RESERVED_OPTION_KEYS: [&str; 3] = ["name", "driver", "priority"];

/// Pipeline priority (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u32);

impl Priority {
    /// Priority assigned when the caller does not choose one
    pub const DEFAULT: Priority = Priority(10);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Priority {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Priority)
            .map_err(|_| DomainError::InvalidPriority(value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backing implementation of a pipeline on the remote server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Driver {
    Memory,
    Amqp,
    Sqs,
    Beanstalk,
    Kafka,
    Nats,
    Boltdb,
    Other(String),
}

impl Driver {
    pub fn as_str(&self) -> &str {
        match self {
            Driver::Memory => "memory",
            Driver::Amqp => "amqp",
            Driver::Sqs => "sqs",
            Driver::Beanstalk => "beanstalk",
            Driver::Kafka => "kafka",
            Driver::Nats => "nats",
            Driver::Boltdb => "boltdb",
            Driver::Other(id) => id.as_str(),
        }
    }
}

impl From<&str> for Driver {
    fn from(id: &str) -> Self {
        match id {
            "memory" => Driver::Memory,
            "amqp" => Driver::Amqp,
            "sqs" => Driver::Sqs,
            "beanstalk" => Driver::Beanstalk,
            "kafka" => Driver::Kafka,
            "nats" => Driver::Nats,
            "boltdb" => Driver::Boltdb,
            other => Driver::Other(other.to_string()),
        }
    }
}

impl From<String> for Driver {
    fn from(id: String) -> Self {
        Driver::from(id.as_str())
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of a pipeline to declare on the remote server.
///
/// Immutable once built. Use [`CreateInfo::new`] for the common case or
/// [`CreateInfo::builder`] / [`CreateInfo::with_options`] to set a priority
/// and driver-specific options.
///
/// # Example
///
/// ```
/// use jobq_core::domain::{CreateInfo, Driver, MemoryOptions};
///
/// let info = CreateInfo::with_options("emails", MemoryOptions { prefetch: 50 })
///     .priority(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(info.driver(), &Driver::Memory);
/// assert_eq!(info.pipeline_map()["prefetch"], "50");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInfo {
    name: String,
    driver: Driver,
    priority: Priority,
    options: BTreeMap<String, Value>,
}

impl CreateInfo {
    /// Configuration with the default priority and no driver options
    pub fn new(name: impl Into<String>, driver: impl Into<Driver>) -> Result<Self> {
        Self::builder(name, driver).build()
    }

    pub fn builder(name: impl Into<String>, driver: impl Into<Driver>) -> CreateInfoBuilder {
        CreateInfoBuilder {
            name: name.into(),
            driver: driver.into(),
            priority: i64::from(Priority::DEFAULT.get()),
            options: BTreeMap::new(),
        }
    }

    /// Start a builder from a typed driver preset
    pub fn with_options<O: DriverOptions>(name: impl Into<String>, options: O) -> CreateInfoBuilder {
        let driver = options.driver();
        let mut builder = Self::builder(name, driver);
        builder.options.extend(options.into_options());
        builder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn options(&self) -> &BTreeMap<String, Value> {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Flat string map sent as the `pipeline` field of a declare request
    pub fn pipeline_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = self
            .options
            .iter()
            .map(|(key, value)| (key.clone(), encode_option_value(value)))
            .collect();

        map.insert("name".to_string(), self.name.clone());
        map.insert("driver".to_string(), self.driver.as_str().to_string());
        map.insert("priority".to_string(), self.priority.to_string());
        map
    }
}

/// Builder for [`CreateInfo`]; all validation happens in [`CreateInfoBuilder::build`].
#[derive(Debug, Clone)]
pub struct CreateInfoBuilder {
    name: String,
    driver: Driver,
    priority: i64,
    options: BTreeMap<String, Value>,
}

impl CreateInfoBuilder {
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.options
            .extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> Result<CreateInfo> {
        if self.name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if self.driver.as_str().is_empty() {
            return Err(DomainError::EmptyDriver);
        }
        if let Some(key) = RESERVED_OPTION_KEYS
            .iter()
            .find(|key| self.options.contains_key(**key))
        {
            return Err(DomainError::ReservedOption(key.to_string()));
        }

        Ok(CreateInfo {
            name: self.name,
            driver: self.driver,
            priority: Priority::try_from(self.priority)?,
            options: self.options,
        })
    }
}

/// Remote declare maps are string-to-string
fn encode_option_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
