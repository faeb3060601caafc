//! Registry wire formats
//!
//! Eureka's JSON mirrors its XML schema: attributes are keys prefixed with
//! `@` and element text lives under `$`. The key names and fixed literals
//! below must stay exactly as they are for the registry to accept them.

use crate::instance::ServiceInstance;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported for every registered instance.
pub const STATUS_UP: &str = "UP";

/// Data center class tag for self-hosted deployments.
pub const DEFAULT_DATA_CENTER_CLASS: &str =
    "com.netflix.appinfo.InstanceInfo$DefaultDataCenterInfo";

/// Data center name for self-hosted deployments.
pub const DEFAULT_DATA_CENTER_NAME: &str = "MyOwn";

/// Body of `POST /eureka/apps/{app}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    pub instance: InstanceInfo,
}

/// Instance document sent on registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub host_name: String,
    pub app: String,
    pub ip_addr: String,
    pub status: String,
    pub port: PortInfo,
    pub data_center_info: DataCenterInfo,
}

/// Port in dual notation. Both fields are strings on registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortInfo {
    #[serde(rename = "$")]
    pub value: String,
    #[serde(rename = "@enabled")]
    pub enabled: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataCenterInfo {
    #[serde(rename = "@class")]
    pub class: String,
    pub name: String,
}

impl Default for DataCenterInfo {
    fn default() -> Self {
        Self {
            class: DEFAULT_DATA_CENTER_CLASS.to_string(),
            name: DEFAULT_DATA_CENTER_NAME.to_string(),
        }
    }
}

impl From<&ServiceInstance> for RegistrationRequest {
    fn from(instance: &ServiceInstance) -> Self {
        Self {
            instance: InstanceInfo {
                host_name: instance.host_name(),
                app: instance.name.clone(),
                ip_addr: instance.ip_address.clone(),
                status: STATUS_UP.to_string(),
                port: PortInfo {
                    value: instance.port.to_string(),
                    enabled: "true".to_string(),
                },
                data_center_info: DataCenterInfo::default(),
            },
        }
    }
}

/// Body of `GET /eureka/apps/{app}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryResponse {
    pub application: Application,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Registered instances, in registry order. The registry collapses a
    /// single instance to a bare object and drops the key when empty.
    #[serde(rename = "instance", default, deserialize_with = "one_or_many")]
    pub instances: Vec<DiscoveredInstance>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredInstance {
    pub ip_addr: String,
    #[serde(default)]
    pub app: String,
    pub port: DiscoveredPort,
}

impl DiscoveredInstance {
    /// Connectable `ip:port` address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip_addr, self.port.value)
    }
}

/// Port in dual notation as returned by the registry. Only `$` is read.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DiscoveredPort {
    #[serde(rename = "$", deserialize_with = "port_number")]
    pub value: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

/// Accepts a JSON number holding an integral value in the port range,
/// whether it was written as `7007` or `7007.0`.
fn port_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    struct PortVisitor;

    impl Visitor<'_> for PortVisitor {
        type Value = u16;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integral port number between 0 and 65535")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u16, E> {
            u16::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u16, E> {
            u16::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u16, E> {
            if v.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&v) {
                Ok(v as u16)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(PortVisitor)
}
