/*
 *  Copyright 2025-2026 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Configuration for the Pandora driver.
//!
//! ```rust,ignore
//! let config = DriverConfig::builder()
//!     .invocation_timeout(Some(Duration::from_secs(10)))
//!     .build();
//! let pandora = Pandora::with_config(APPLICATION_GUID, config);
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::time::Duration;

use crate::error::PandoraError;

/// Executable name of the engine.
pub const DEFAULT_ENGINE_NAME: &str = "pandora";

/// Upper bound on a single engine invocation unless configured otherwise.
pub const DEFAULT_INVOCATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the engine executable name.
pub const ENGINE_NAME_ENV: &str = "PANDORA_ENGINE";
/// Environment variable overriding the directories searched for the engine.
pub const SEARCH_PATH_ENV: &str = "PANDORA_SEARCH_PATH";
/// Environment variable overriding the invocation timeout, in seconds.
pub const TIMEOUT_ENV: &str = "PANDORA_TIMEOUT_SECS";

/// How the driver finds and runs the engine.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DriverConfig {
    engine_name: String,
    search_path: Option<OsString>,
    invocation_timeout: Option<Duration>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfigBuilder::default().build()
    }
}

impl DriverConfig {
    /// Creates a new configuration builder with default values.
    pub fn builder() -> DriverConfigBuilder {
        DriverConfigBuilder::default()
    }

    /// Defaults overlaid with `PANDORA_ENGINE`, `PANDORA_SEARCH_PATH` and
    /// `PANDORA_TIMEOUT_SECS`.
    ///
    /// A timeout of `0` disables the timeout.
    pub fn from_env() -> Result<Self, PandoraError> {
        let mut builder = Self::builder();

        if let Ok(name) = env::var(ENGINE_NAME_ENV) {
            if name.trim().is_empty() {
                return Err(PandoraError::Config {
                    reason: format!("{} must not be empty", ENGINE_NAME_ENV),
                });
            }
            builder = builder.engine_name(name.trim());
        }

        if let Some(search_path) = env::var_os(SEARCH_PATH_ENV) {
            builder = builder.search_path(Some(search_path));
        }

        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|e| PandoraError::Config {
                reason: format!("{} must be a whole number of seconds: {}", TIMEOUT_ENV, e),
            })?;
            let timeout = if secs == 0 {
                None
            } else {
                Some(Duration::from_secs(secs))
            };
            builder = builder.invocation_timeout(timeout);
        }

        Ok(builder.build())
    }

    /// A builder starting from this configuration.
    pub fn into_builder(self) -> DriverConfigBuilder {
        DriverConfigBuilder { config: self }
    }

    /// Executable name searched for on the search path.
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// Directories searched for the engine; `None` means the process `PATH`.
    pub fn search_path(&self) -> Option<&OsStr> {
        self.search_path.as_deref()
    }

    /// Maximum time a single engine invocation may take.
    pub fn invocation_timeout(&self) -> Option<Duration> {
        self.invocation_timeout
    }
}

/// Builder for [`DriverConfig`].
#[derive(Debug, Clone)]
pub struct DriverConfigBuilder {
    config: DriverConfig,
}

impl Default for DriverConfigBuilder {
    fn default() -> Self {
        Self {
            config: DriverConfig {
                engine_name: DEFAULT_ENGINE_NAME.to_string(),
                search_path: None,
                invocation_timeout: Some(DEFAULT_INVOCATION_TIMEOUT),
            },
        }
    }
}

impl DriverConfigBuilder {
    /// Sets the engine executable name.
    pub fn engine_name(mut self, value: impl Into<String>) -> Self {
        self.config.engine_name = value.into();
        self
    }

    /// Sets the search path override.
    pub fn search_path(mut self, value: Option<OsString>) -> Self {
        self.config.search_path = value;
        self
    }

    /// Sets the invocation timeout; `None` waits indefinitely.
    pub fn invocation_timeout(mut self, value: Option<Duration>) -> Self {
        self.config.invocation_timeout = value;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> DriverConfig {
        self.config
    }
}
