// Configuration for the Eureka registrar
//
// Settings come from a JSON or TOML file, a `.env` file and `EUREKA_*`
// environment variables, in increasing order of precedence.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::{
    ENV_PREFIX, HttpSettings, RegistrarConfig, RegistrySettings, TokenSettings,
};
pub use validation::{ConfigValidator, Validate};
