// Registrar settings

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, Result, Validate};
use eureka_client::ServiceInstance;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `EUREKA_REGISTRY_URL`.
pub const ENV_PREFIX: &str = "EUREKA";

/// Environment keys (without prefix) and the setting each one overrides.
const STRING_OVERRIDES: &[(&str, &[&str])] = &[
    ("REGISTRY_URL", &["registry", "base_url"]),
    ("TOKEN_URL", &["token", "url"]),
    ("CLIENT_NAME", &["token", "client_name"]),
    ("CLIENT_SECRET", &["token", "client_secret"]),
];

/// Holds a JSON array of instances.
const INSTANCES_OVERRIDE: &str = "INSTANCES";

/// Complete registrar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    pub registry: RegistrySettings,
    pub token: TokenSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub instances: Vec<ServiceInstance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Registry base URL, may include a path prefix
    pub base_url: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TokenSettings {
    /// Token endpoint
    pub url: String,
    pub client_name: String,
    pub client_secret: String,
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("url", &self.url)
            .field("client_name", &self.client_name)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: None,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl RegistrarConfig {
    /// Load from an optional file, `.env` and `EUREKA_*` variables, then
    /// validate.
    ///
    /// Environment variables take precedence over the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok(); // Ignore if .env doesn't exist

        let env = EnvLoader::new(Some(ENV_PREFIX.to_string()));
        Self::load_with(path, |key| env.get(key))
    }

    /// Same as [`load`](Self::load) with an explicit variable lookup.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut value = match path {
            Some(path) => ConfigLoader::auto(path)?.load_file(path)?,
            None => Value::Object(Map::new()),
        };

        apply_overrides(&mut value, lookup)?;

        let config: Self = serde_json::from_value(value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}

fn apply_overrides<F>(value: &mut Value, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    for (key, path) in STRING_OVERRIDES {
        if let Some(override_value) = lookup(*key) {
            set_path(value, *path, Value::String(override_value))?;
        }
    }

    if let Some(raw) = lookup(INSTANCES_OVERRIDE) {
        let instances: Value = serde_json::from_str(&raw).map_err(|e| {
            ConfigError::ParseError(format!("{}_{}: {}", ENV_PREFIX, INSTANCES_OVERRIDE, e))
        })?;
        set_path(value, &["instances"], instances)?;
    }

    Ok(())
}

fn set_path(value: &mut Value, path: &[&str], new_value: Value) -> Result<()> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut current = value;
    for segment in parents {
        current = as_object(current, segment)?
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    as_object(current, last)?.insert(last.to_string(), new_value);
    Ok(())
}

fn as_object<'a>(value: &'a mut Value, key: &str) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| {
        ConfigError::ParseError(format!("cannot set {}: parent is not a table", key))
    })
}

impl Validate for RegistrarConfig {
    fn validate(&self) -> Result<()> {
        ConfigValidator::is_url(&self.registry.base_url, "registry.base_url")?;
        ConfigValidator::is_url(&self.token.url, "token.url")?;
        ConfigValidator::not_empty(&self.token.client_name, "token.client_name")?;
        ConfigValidator::not_empty(&self.token.client_secret, "token.client_secret")?;
        ConfigValidator::in_range(self.http.timeout_secs, 1, 600, "http.timeout_secs")?;
        ConfigValidator::in_range(
            self.http.connect_timeout_secs,
            1,
            600,
            "http.connect_timeout_secs",
        )?;

        for (i, instance) in self.instances.iter().enumerate() {
            ConfigValidator::not_empty(&instance.name, &format!("instances[{}].name", i))?;
            ConfigValidator::not_empty(
                &instance.ip_address,
                &format!("instances[{}].ip_address", i),
            )?;
            ConfigValidator::is_port(instance.port, &format!("instances[{}].port", i))?;
        }

        Ok(())
    }
}
