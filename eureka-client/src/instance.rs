//! Service instances supplied by configuration

use serde::{Deserialize, Serialize};

/// One instance of an application to register with the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    /// Application name
    pub name: String,

    /// Index of this instance within the application
    pub instance_index: u32,

    /// Address other services should connect to
    pub ip_address: String,

    /// Port number
    pub port: u16,
}

impl ServiceInstance {
    /// Create new service instance
    pub fn new(
        name: impl Into<String>,
        instance_index: u32,
        ip_address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            instance_index,
            ip_address: ip_address.into(),
            port,
        }
    }

    /// Host name reported to the registry, `{name}-{index}-{port}`.
    pub fn host_name(&self) -> String {
        format!("{}-{}-{}", self.name, self.instance_index, self.port)
    }

    /// Connectable `ip:port` address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip_address, self.port)
    }
}
