use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Gateway credentials. `secret_key` is sent as the remote API's login;
/// `publishable_key` is client-side only and unused by the server-side
/// operations.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GatewaySettings {
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub publishable_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub stripe: GatewaySettings,
}

impl Config {
    /// Load from config.toml (if present) and environment variables.
    /// Environment variables override file values.
    /// Supported env keys: STRIPE_SECRET_KEY, STRIPE_PUBLISHABLE_KEY
    pub fn load() -> Self {
        let base: Config = Default::default();
        let mut fig = Figment::from(Serialized::defaults(base));
        if std::path::Path::new("config.toml").exists() {
            fig = fig.merge(Toml::file("config.toml"));
        }
        let mut cfg: Config = fig.extract().unwrap_or_default();

        if let Ok(v) = std::env::var("STRIPE_SECRET_KEY") {
            cfg.stripe.secret_key = v;
        }
        if let Ok(v) = std::env::var("STRIPE_PUBLISHABLE_KEY") {
            cfg.stripe.publishable_key = v;
        }

        cfg
    }

    pub fn from_env() -> Self {
        Self::load()
    }
}
