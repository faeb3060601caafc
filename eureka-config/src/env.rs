// Environment variable loading

use std::env;

/// Reads `{PREFIX}_{KEY}` variables.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Full variable name for a key, upper-cased.
    pub fn var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Value of the variable for `key`. Unset, empty and non-unicode values
    /// all read as `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        env::var(self.var_name(key))
            .ok()
            .filter(|value| !value.is_empty())
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // std::env::set_var is unsafe in edition 2024, so these tests only read
    // variables that are (or are not) already present.

    #[test]
    fn test_missing_var() {
        let loader = EnvLoader::new(Some("EUREKA_TEST".to_string()));
        assert!(loader.get("MISSING_VAR_67890").is_none());
    }

    #[test]
    fn test_var_name_prefix() {
        let loader = EnvLoader::new(Some("EUREKA".to_string()));
        assert_eq!(loader.var_name("registry_url"), "EUREKA_REGISTRY_URL");

        let loader = EnvLoader::default();
        assert_eq!(loader.var_name("path"), "PATH");
    }

    #[test]
    fn test_unprefixed_lookup() {
        let loader = EnvLoader::default();
        assert_eq!(
            loader.get("PATH"),
            std::env::var("PATH").ok().filter(|v| !v.is_empty())
        );
    }
}
