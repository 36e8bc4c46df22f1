use std::env;
use std::num::ParseIntError;
use thiserror::Error;

pub const ENV_VAR_WRITE_BUF_CAPACITY: &str = "NBT_WRITE_BUF_CAPACITY";

const DEFAULT_WRITE_BUF_CAPACITY: usize = 8 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a byte count: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Tunables of [`crate::StreamSink`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct StreamSinkConfig {
    /// Capacity of the `BufWriter` in front of the destination. Zero writes through.
    pub buf_capacity: usize,
}

impl Default for StreamSinkConfig {
    fn default() -> Self {
        Self {
            buf_capacity: DEFAULT_WRITE_BUF_CAPACITY,
        }
    }
}

impl StreamSinkConfig {
    /// Defaults, overridden by whichever env vars are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut conf = Self::default();
        if let Some(value) = lookup(ENV_VAR_WRITE_BUF_CAPACITY) {
            conf.buf_capacity = match value.trim().parse() {
                Ok(cap) => cap,
                Err(source) => {
                    return Err(ConfigError::InvalidNumber {
                        var: ENV_VAR_WRITE_BUF_CAPACITY,
                        value,
                        source,
                    })
                }
            };
        }
        Ok(conf)
    }
}
