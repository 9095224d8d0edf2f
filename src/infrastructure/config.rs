use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientConfig {
    /// Server origin, e.g. "http://localhost:8000". Empty means the host
    /// application resolves paths itself (same-origin deployments).
    #[serde(default)]
    pub base_url: String,
}

/// Resolve the client configuration. An explicit `base_url_override` wins
/// over `RMHT_BASE_URL`, which wins over an optional `config/client` file.
pub fn load_client_config(base_url_override: Option<String>) -> anyhow::Result<ClientConfig> {
    let mut builder = config::Config::builder()
        .set_default("base_url", "")?
        .add_source(config::File::with_name("config/client").required(false))
        .add_source(config::Environment::with_prefix("RMHT"));

    if let Some(url) = base_url_override {
        builder = builder.set_override("base_url", url)?;
    }

    let settings = builder.build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_defaults_to_empty() {
        let cfg: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.base_url, "");
    }

    #[test]
    fn test_explicit_override_beats_every_other_source() {
        let cfg = load_client_config(Some("http://rituals.test".to_string())).unwrap();
        assert_eq!(cfg.base_url, "http://rituals.test");
    }
}
