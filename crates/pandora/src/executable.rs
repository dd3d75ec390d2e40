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

//! Locating and invoking the engine executable.
//!
//! The driver talks to the engine only through the [`EngineInvoker`] trait.
//! [`Executable`] is the production implementation: it searches the host
//! search path for the engine binary and spawns it directly, without a shell.

use async_trait::async_trait;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tracing::debug;

use crate::driver::{DriverConfig, DEFAULT_INVOCATION_TIMEOUT};
use crate::error::PandoraError;

/// Something that can run engine commands.
#[async_trait]
pub trait EngineInvoker: Send + Sync {
    /// Whether the engine is available to run.
    fn found(&self) -> bool;

    /// Runs the engine with `args` and returns its standard output.
    async fn run(&self, args: &[String]) -> Result<String, PandoraError>;
}

/// The engine binary on the local machine.
#[derive(Debug, Clone)]
pub struct Executable {
    name: String,
    search_path: Option<OsString>,
    timeout: Option<Duration>,
}

impl Executable {
    /// An executable looked up on the process `PATH`, bounded by
    /// [`DEFAULT_INVOCATION_TIMEOUT`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_path: None,
            timeout: Some(DEFAULT_INVOCATION_TIMEOUT),
        }
    }

    /// An executable looked up on the driver's configured search path.
    pub fn from_config(config: &DriverConfig) -> Self {
        let executable =
            Self::new(config.engine_name()).with_timeout(config.invocation_timeout());
        match config.search_path() {
            Some(search_path) => executable.with_search_path(search_path),
            None => executable,
        }
    }

    /// Searches `search_path` instead of the process `PATH`.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Bounds each invocation to `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper bound on a single invocation; `None` waits indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Finds the first directory on the search path containing a file named
    /// exactly like the executable.
    ///
    /// Directories are visited in order and split with the platform separator.
    /// Unreadable directories are skipped. Returns `None` when the search path
    /// is unset, empty, or has no match.
    pub fn look_path(&self) -> Option<PathBuf> {
        let search_path = match &self.search_path {
            Some(path) => path.clone(),
            None => env::var_os("PATH")?,
        };
        if search_path.is_empty() {
            return None;
        }

        for dir in env::split_paths(&search_path) {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => continue,
            };
            for entry in entries.flatten() {
                if entry.file_name() == OsStr::new(&self.name) {
                    let path = entry.path();
                    debug!("Found {} at {}", self.name, path.display());
                    return Some(path);
                }
            }
        }

        debug!("{} not found on search path", self.name);
        None
    }
}

#[async_trait]
impl EngineInvoker for Executable {
    fn found(&self) -> bool {
        self.look_path().is_some()
    }

    async fn run(&self, args: &[String]) -> Result<String, PandoraError> {
        let program = self.look_path().ok_or(PandoraError::EngineNotInstalled)?;

        // Arguments carry plain text and the application GUID; only the
        // command name is logged.
        debug!(
            engine = %program.display(),
            command = args.first().map(String::as_str).unwrap_or_default(),
            arg_count = args.len(),
            "Invoking engine"
        );

        let mut command = tokio::process::Command::new(&program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, command.output())
                .await
                .map_err(|_| PandoraError::EngineTimeout { timeout })?,
            None => command.output().await,
        }
        .map_err(|e| {
            PandoraError::runtime(format!("failed to run {}: {}", program.display(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PandoraError::runtime(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| PandoraError::runtime("engine output is not valid UTF-8"))
    }
}
