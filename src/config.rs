use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source (process env in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "product-service".to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_name, "product-service");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = vars(&[("HOST", "0.0.0.0"), ("PORT", "9000"), ("SERVICE_NAME", "catalog")]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.service_name, "catalog");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let env = vars(&[("PORT", "not-a-port")]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("PORT"), "error should name the variable: {err}");
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let env = vars(&[("PORT", "70000")]);
        assert!(Config::from_lookup(|k| env.get(k).cloned()).is_err());
    }
}
