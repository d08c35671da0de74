// Driver-specific option presets
//
// Defaults mirror the ones the remote jobs server applies when an option is
// omitted, so a preset built with `Default::default()` declares the same
// pipeline as a bare configuration would.

use super::pipeline::Driver;
use serde_json::Value;
use std::collections::BTreeMap;

/// Typed option set for one driver
pub trait DriverOptions {
    fn driver(&self) -> Driver;

    fn into_options(self) -> BTreeMap<String, Value>;
}

/// In-memory driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryOptions {
    pub prefetch: u32,
}

impl Default for MemoryOptions {
    fn default() -> Self {
        Self { prefetch: 10 }
    }
}

impl DriverOptions for MemoryOptions {
    fn driver(&self) -> Driver {
        Driver::Memory
    }

    fn into_options(self) -> BTreeMap<String, Value> {
        BTreeMap::from([("prefetch".to_string(), Value::from(self.prefetch))])
    }
}

/// AMQP (RabbitMQ) driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmqpOptions {
    pub prefetch: u32,
    pub queue: String,
    pub exchange: String,
    pub exchange_type: String,
    pub routing_key: String,
    pub exclusive: bool,
    pub multiple_ack: bool,
    pub requeue_on_fail: bool,
    pub durable: bool,
}

impl Default for AmqpOptions {
    fn default() -> Self {
        Self {
            prefetch: 100,
            queue: "default".to_string(),
            exchange: "amqp.default".to_string(),
            exchange_type: "direct".to_string(),
            routing_key: String::new(),
            exclusive: false,
            multiple_ack: false,
            requeue_on_fail: false,
            durable: false,
        }
    }
}

impl DriverOptions for AmqpOptions {
    fn driver(&self) -> Driver {
        Driver::Amqp
    }

    fn into_options(self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("prefetch".to_string(), Value::from(self.prefetch)),
            ("queue".to_string(), Value::from(self.queue)),
            ("exchange".to_string(), Value::from(self.exchange)),
            ("exchange_type".to_string(), Value::from(self.exchange_type)),
            ("routing_key".to_string(), Value::from(self.routing_key)),
            ("exclusive".to_string(), Value::from(self.exclusive)),
            ("multiple_ack".to_string(), Value::from(self.multiple_ack)),
            ("requeue_on_fail".to_string(), Value::from(self.requeue_on_fail)),
            ("durable".to_string(), Value::from(self.durable)),
        ])
    }
}

/// Beanstalk driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanstalkOptions {
    pub tube_priority: u32,
    pub tube: String,
    /// Seconds
    pub reserve_timeout: u32,
}

impl Default for BeanstalkOptions {
    fn default() -> Self {
        Self {
            tube_priority: 10,
            tube: "default".to_string(),
            reserve_timeout: 5,
        }
    }
}

impl DriverOptions for BeanstalkOptions {
    fn driver(&self) -> Driver {
        Driver::Beanstalk
    }

    fn into_options(self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("tube_priority".to_string(), Value::from(self.tube_priority)),
            ("tube".to_string(), Value::from(self.tube)),
            ("reserve_timeout".to_string(), Value::from(self.reserve_timeout)),
        ])
    }
}

/// Amazon SQS driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqsOptions {
    pub prefetch: u32,
    /// Seconds; 0 keeps the queue's own setting
    pub visibility_timeout: u32,
    /// Long-polling wait in seconds
    pub wait_time_seconds: u32,
    pub queue: String,
}

impl Default for SqsOptions {
    fn default() -> Self {
        Self {
            prefetch: 10,
            visibility_timeout: 0,
            wait_time_seconds: 0,
            queue: "default".to_string(),
        }
    }
}

impl DriverOptions for SqsOptions {
    fn driver(&self) -> Driver {
        Driver::Sqs
    }

    fn into_options(self) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("prefetch".to_string(), Value::from(self.prefetch)),
            ("visibility_timeout".to_string(), Value::from(self.visibility_timeout)),
            ("wait_time_seconds".to_string(), Value::from(self.wait_time_seconds)),
            ("queue".to_string(), Value::from(self.queue)),
        ])
    }
}
