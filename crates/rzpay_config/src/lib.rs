use config::{Config, ConfigError, Environment};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::env;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the application configuration from the process environment.
///
/// A `.env` file is loaded first (once per process) so that local development
/// works without exporting anything. Fails when `RZKEY`, `RZPASS` or
/// `MONGO_URI` is missing; callers treat that as fatal.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    load_config_from_vars(&env::vars().collect())
}

/// Builds the configuration from an explicit variable map.
///
/// Layering, lowest to highest priority: built-in defaults, `RZPAY__*`
/// variables, then the flat deployment variables (`RZKEY`, `RZPASS`,
/// `MONGO_URI`, `PORT`).
pub fn load_config_from_vars(vars: &HashMap<String, String>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("razorpay.base_url", "https://api.razorpay.com")?
        .set_default("razorpay.timeout_secs", 10_i64)?
        .set_default("database.name", "wym")?
        .set_default("database.collection", "payments")?
        .set_default("database.connect_timeout_secs", 10_i64)?
        .set_default("database.insert_timeout_secs", 5_i64)?
        .set_default("database.find_timeout_secs", 10_i64)?
        .add_source(
            Environment::with_prefix(env_vars::CONFIG_PREFIX)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true)
                .source(Some(vars.clone().into_iter().collect())),
        );

    for (var, path) in env_vars::LEGACY_OVERRIDES {
        builder =
            builder.set_override_option(path, env_vars::non_empty(vars, var).map(str::to_string))?;
    }

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;

    tracing::debug!(
        host = %config.server.host,
        port = config.server.port,
        database = %config.database.name,
        collection = %config.database.collection,
        "configuration loaded"
    );
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let required = [
        (env_vars::RZKEY, "razorpay.key_id", &config.razorpay.key_id),
        (env_vars::RZPASS, "razorpay.key_secret", &config.razorpay.key_secret),
        (env_vars::MONGO_URI, "database.uri", &config.database.uri),
    ];
    for (var, path, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "required environment variable {var} (or {}) is not set",
                env_vars::config_path_to_env_var(path)
            )));
        }
    }

    // A zero deadline fails every call it guards
    let timeouts = [
        ("razorpay.timeout_secs", config.razorpay.timeout_secs),
        ("database.connect_timeout_secs", config.database.connect_timeout_secs),
        ("database.insert_timeout_secs", config.database.insert_timeout_secs),
        ("database.find_timeout_secs", config.database.find_timeout_secs),
    ];
    for (path, secs) in timeouts {
        if secs == 0 {
            return Err(ConfigError::Message(format!(
                "{} must be at least 1 second",
                env_vars::config_path_to_env_var(path)
            )));
        }
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// Uses `DOTENV_OVERRIDE` when set, otherwise `.env` in the working
/// directory. A missing file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        if dotenv::from_filename(&dotenv_path).is_err() {
            tracing::debug!("no dotenv file loaded from {}", dotenv_path);
        }
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_vars() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("RZKEY".to_string(), "rzp_test_key".to_string());
        vars.insert("RZPASS".to_string(), "rzp_test_secret".to_string());
        vars.insert(
            "MONGO_URI".to_string(),
            "mongodb://localhost:27017".to_string(),
        );
        vars
    }

    #[test]
    fn test_defaults_with_required_vars() {
        let config = load_config_from_vars(&required_vars()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.razorpay.key_id, "rzp_test_key");
        assert_eq!(config.razorpay.key_secret, "rzp_test_secret");
        assert_eq!(config.razorpay.base_url, "https://api.razorpay.com");
        assert_eq!(config.razorpay.timeout_secs, 10);
        assert_eq!(config.database.uri, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "wym");
        assert_eq!(config.database.collection, "payments");
        assert_eq!(config.database.insert_timeout_secs, 5);
        assert_eq!(config.database.find_timeout_secs, 10);
    }

    #[test]
    fn test_port_override() {
        let mut vars = required_vars();
        vars.insert("PORT".to_string(), "3000".to_string());

        let config = load_config_from_vars(&vars).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut vars = required_vars();
        vars.insert("PORT".to_string(), "not-a-port".to_string());

        assert!(load_config_from_vars(&vars).is_err());
    }

    #[test]
    fn test_prefixed_override() {
        let mut vars = required_vars();
        vars.insert("RZPAY__DATABASE__NAME".to_string(), "staging".to_string());

        let config = load_config_from_vars(&vars).unwrap();
        assert_eq!(config.database.name, "staging");
    }

    #[test]
    fn test_missing_required_vars() {
        for missing in ["RZKEY", "RZPASS", "MONGO_URI"] {
            let mut vars = required_vars();
            vars.remove(missing);

            let err = load_config_from_vars(&vars).unwrap_err();
            assert!(
                err.to_string().contains(missing),
                "error for {missing} was: {err}"
            );
        }
    }

    #[test]
    fn test_blank_required_var_counts_as_missing() {
        let mut vars = required_vars();
        vars.insert("RZPASS".to_string(), "   ".to_string());

        let err = load_config_from_vars(&vars).unwrap_err();
        assert!(err.to_string().contains("RZPASS"));
    }

    #[test]
    fn test_zero_timeouts_are_rejected() {
        for var in [
            "RZPAY__RAZORPAY__TIMEOUT_SECS",
            "RZPAY__DATABASE__CONNECT_TIMEOUT_SECS",
            "RZPAY__DATABASE__INSERT_TIMEOUT_SECS",
            "RZPAY__DATABASE__FIND_TIMEOUT_SECS",
        ] {
            let mut vars = required_vars();
            vars.insert(var.to_string(), "0".to_string());

            let err = load_config_from_vars(&vars).unwrap_err();
            assert!(err.to_string().contains(var), "error for {var} was: {err}");
        }
    }

    #[test]
    fn test_timeout_override() {
        let mut vars = required_vars();
        vars.insert("RZPAY__RAZORPAY__TIMEOUT_SECS".to_string(), "30".to_string());

        let config = load_config_from_vars(&vars).unwrap();
        assert_eq!(config.razorpay.timeout_secs, 30);
    }

    #[test]
    fn test_secrets_are_not_exposed() {
        let config = load_config_from_vars(&required_vars()).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("rzp_test_secret"));
        assert!(!json.contains("mongodb://"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("rzp_test_secret"));
        assert!(!debug.contains("mongodb://"));
    }
}
