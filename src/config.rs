//! Configuration primitives for the IPS2550 driver.

/// User-facing configuration for the IPS2550 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Register read attempts before the device counts as unresponsive.
    pub read_attempts: u8,
    /// Settle time between read attempts, in milliseconds.
    pub retry_settle_ms: u32,
    /// Settle time after each configuration register write, in milliseconds.
    pub write_settle_ms: u32,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is usable.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.read_attempts == 0 {
            return Err(ConfigError::NoReadAttempts);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the register read retry budget.
    pub fn read_attempts(mut self, attempts: u8) -> Self {
        self.config.read_attempts = attempts;
        self
    }

    /// Overrides the settle time between read attempts.
    pub fn retry_settle_ms(mut self, millis: u32) -> Self {
        self.config.retry_settle_ms = millis;
        self
    }

    /// Overrides the settle time after configuration writes.
    pub fn write_settle_ms(mut self, millis: u32) -> Self {
        self.config.write_settle_ms = millis;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_attempts: 3,
            retry_settle_ms: 10,
            write_settle_ms: 50,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The retry budget allows no read attempt at all.
    NoReadAttempts,
}
