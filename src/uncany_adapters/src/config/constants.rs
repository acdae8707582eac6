pub const CONFIG_FILE: &str = "config/default";
pub const ENV_PREFIX: &str = "UNCANY";
pub const ENV_SEPARATOR: &str = "__";

/// Variables set by the hosting platform, honoured as overrides.
pub mod env {
    pub const SUPABASE_URL_ENV_VAR: &str = "SUPABASE_URL";
    pub const SUPABASE_SERVICE_ROLE_KEY_ENV_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
    pub const NEIS_API_KEY_ENV_VAR: &str = "NEIS_API_KEY";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const TIMEOUT_IN_MILLIS: u64 = 10_000;

    pub mod directory {
        pub const BASE_URL: &str = "https://open.neis.go.kr/hub";
        pub const CLIENT_ID: &str = "uncany-edge/0.1";
    }

    pub mod database {
        pub const MAX_CONNECTIONS: u32 = 5;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const TIMEOUT_IN_MILLIS: u64 = 200;
}
