use serde::Deserialize;

/// Runtime configuration for the validation service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Longest document string (in characters) the API will process.
    pub max_document_length: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            max_document_length: 64,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

/// Read an optional positive integer variable, falling back to `default`.
fn positive_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };

    let value: T = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a valid positive integer", name))?;
    if value < T::from(1) {
        anyhow::bail!("{} must be at least 1", name);
    }

    Ok(value)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            max_document_length: positive_var(
                "MAX_DOCUMENT_LENGTH",
                defaults.max_document_length,
            )?,
            rate_limit_per_second: positive_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            )?,
            rate_limit_burst: positive_var("RATE_LIMIT_BURST", defaults.rate_limit_burst)?,
        };

        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Max document length: {}", config.max_document_length);
        tracing::debug!(
            "Rate limit: {}/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }
}
