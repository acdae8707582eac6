use std::{collections::HashMap, time::Duration};

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use uncany_application::DeletionPlan;

use super::constants::{CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR, env, prod};

/// Process-wide settings, loaded once at start-up and passed to the service.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSettings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    pub directory: DirectorySettings,
    pub deletion: DeletionSettings,
    #[serde(default)]
    pub database: Option<DatabaseSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub service_role_key: Secret<String>,
    pub timeout_in_millis: u64,
}

impl SupabaseSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    pub base_url: String,
    /// Missing keys are reported per request, not at start-up.
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    pub client_id: String,
    pub timeout_in_millis: u64,
}

impl DirectorySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletionSettings {
    pub profile_table: String,
    pub profile_id_column: String,
    pub profile_email_column: String,
    pub dependent_table: String,
    pub dependent_owner_column: String,
    pub deleted_at_column: String,
    pub anonymized_email_domain: String,
}

impl From<DeletionSettings> for DeletionPlan {
    fn from(settings: DeletionSettings) -> Self {
        Self {
            profile_table: settings.profile_table,
            profile_id_column: settings.profile_id_column,
            profile_email_column: settings.profile_email_column,
            dependent_table: settings.dependent_table,
            dependent_owner_column: settings.dependent_owner_column,
            deleted_at_column: settings.deleted_at_column,
            anonymized_email_domain: settings.anonymized_email_domain,
        }
    }
}

/// Direct database access, used instead of the data API when present.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    prod::database::MAX_CONNECTIONS
}

impl EdgeSettings {
    /// Load settings from `config/default.*`, `UNCANY__*` variables and the
    /// platform's conventional variables, in increasing precedence.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::from_sources(None)
    }

    /// Same as [`EdgeSettings::load`] but reading variables from `vars`
    /// instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_sources(Some(vars))
    }

    fn from_sources(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        // Blank platform variables count as unset.
        let lookup = |name: &str| {
            match &vars {
                Some(vars) => vars.get(name).cloned(),
                None => std::env::var(name).ok(),
            }
            .filter(|value| !value.trim().is_empty())
        };
        let defaults = DeletionPlan::default();

        Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("supabase.timeout_in_millis", prod::TIMEOUT_IN_MILLIS)?
            .set_default("directory.base_url", prod::directory::BASE_URL)?
            .set_default("directory.client_id", prod::directory::CLIENT_ID)?
            .set_default("directory.timeout_in_millis", prod::TIMEOUT_IN_MILLIS)?
            .set_default("deletion.profile_table", defaults.profile_table)?
            .set_default("deletion.profile_id_column", defaults.profile_id_column)?
            .set_default("deletion.profile_email_column", defaults.profile_email_column)?
            .set_default("deletion.dependent_table", defaults.dependent_table)?
            .set_default("deletion.dependent_owner_column", defaults.dependent_owner_column)?
            .set_default("deletion.deleted_at_column", defaults.deleted_at_column)?
            .set_default(
                "deletion.anonymized_email_domain",
                defaults.anonymized_email_domain,
            )?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(vars.clone()),
            )
            .set_override_option("supabase.url", lookup(env::SUPABASE_URL_ENV_VAR))?
            .set_override_option(
                "supabase.service_role_key",
                lookup(env::SUPABASE_SERVICE_ROLE_KEY_ENV_VAR),
            )?
            .set_override_option("directory.api_key", lookup(env::NEIS_API_KEY_ENV_VAR))?
            .set_override_option("database.url", lookup(env::DATABASE_URL_ENV_VAR))?
            .build()?
            .try_deserialize()
    }

    pub fn deletion_plan(&self) -> DeletionPlan {
        self.deletion.clone().into()
    }
}
