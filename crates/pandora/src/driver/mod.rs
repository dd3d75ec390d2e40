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

//! The Pandora driver.
//!
//! [`Pandora`] binds an application GUID to an engine and runs the invocation
//! protocol for every command:
//!
//! 1. Fail with [`PandoraError::EngineNotInstalled`] if the engine is missing
//! 2. Build the argument list, adding `-a <guid>` for authenticated commands
//! 3. Invoke the engine
//! 4. Decode the response envelope
//! 5. Verify the envelope signature before anything in `data` is used
//! 6. Fail with [`PandoraError::CommandFailure`] if the engine reported failure
//! 7. Decode the command payload
//!
//! Encryption and decryption are additionally gated on the configured minimum
//! engine version.

mod config;

pub use config::{
    DriverConfig, DriverConfigBuilder, DEFAULT_ENGINE_NAME, DEFAULT_INVOCATION_TIMEOUT,
    ENGINE_NAME_ENV, SEARCH_PATH_ENV, TIMEOUT_ENV,
};

use tracing::{debug, warn};

use crate::command::Command;
use crate::crypto::ResponseVerifier;
use crate::encoding::{decode_output, decode_plain_text, encode_plain_text};
use crate::error::PandoraError;
use crate::executable::{EngineInvoker, Executable};
use crate::reports::{DecryptionReport, EncryptionReport, VersionSatisfactionReport};
use crate::response::{DecryptionResult, EncryptionResult, Envelope, VersionResult};
use crate::version::SemanticVersion;

/// Driver for the Pandora engine, bound to one application.
///
/// The minimum version is plain driver state: changing it takes `&mut self`,
/// so it cannot change underneath an in-flight call.
#[derive(Debug)]
pub struct Pandora<E: EngineInvoker = Executable> {
    application_guid: String,
    engine: E,
    verifier: ResponseVerifier,
    minimum_version: Option<SemanticVersion>,
}

impl Pandora<Executable> {
    /// A driver for `application_guid` using the default configuration.
    pub fn new(application_guid: impl Into<String>) -> Self {
        Self::with_config(application_guid, DriverConfig::default())
    }

    /// A driver for `application_guid` using `config`.
    pub fn with_config(application_guid: impl Into<String>, config: DriverConfig) -> Self {
        Self::with_engine(application_guid, Executable::from_config(&config))
    }
}

impl<E: EngineInvoker> Pandora<E> {
    /// A driver that runs commands through `engine`.
    pub fn with_engine(application_guid: impl Into<String>, engine: E) -> Self {
        Self {
            application_guid: application_guid.into(),
            engine,
            verifier: ResponseVerifier::default(),
            minimum_version: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_verifier(mut self, verifier: ResponseVerifier) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn application_guid(&self) -> &str {
        &self.application_guid
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn minimum_version(&self) -> Option<SemanticVersion> {
        self.minimum_version
    }

    /// Whether the engine is installed.
    pub fn is_installed(&self) -> bool {
        self.engine.found()
    }

    /// Requires at least `version` for encryption and decryption.
    pub fn set_minimum_version(&mut self, version: SemanticVersion) {
        self.minimum_version = Some(version);
    }

    /// Removes the minimum version requirement.
    pub fn clear_minimum_version(&mut self) {
        self.minimum_version = None;
    }

    /// Runs one command and returns its authenticated, successful envelope.
    async fn execute_command(
        &self,
        command: Command,
        args: &[&str],
    ) -> Result<Envelope, PandoraError> {
        if !self.engine.found() {
            return Err(PandoraError::EngineNotInstalled);
        }

        let argv = command.build_args(&self.application_guid, args);
        debug!("Running pandora {}", command);
        let output = self.engine.run(&argv).await?;

        let envelope: Envelope = decode_output(&output)?;
        if !self.verifier.verify(&envelope.data, &envelope.signature) {
            warn!("Rejected pandora {} response: invalid signature", command);
            return Err(PandoraError::InvalidSignature);
        }

        if !envelope.success {
            debug!("pandora {} reported failure: {}", command, envelope.message);
            return Err(PandoraError::CommandFailure {
                message: envelope.message,
                initiator: envelope.initiator,
            });
        }

        Ok(envelope)
    }

    /// Queries the installed engine version.
    pub async fn check_version(&self) -> Result<SemanticVersion, PandoraError> {
        let envelope = self.execute_command(Command::Version, &[]).await?;
        let result: VersionResult = decode_output(&envelope.data)?;
        Ok(SemanticVersion::new(result.major, result.minor, result.patch))
    }

    /// Checks the installed engine against the configured minimum version.
    ///
    /// Without a minimum this is trivially satisfied and the engine is not
    /// invoked.
    pub async fn is_satisfy_minimum_version(
        &self,
    ) -> Result<VersionSatisfactionReport, PandoraError> {
        let minimum = match self.minimum_version {
            Some(minimum) => minimum,
            None => return Ok(VersionSatisfactionReport::unconstrained()),
        };

        let found = self.check_version().await?;
        Ok(VersionSatisfactionReport {
            is_satisfied: found.compare_version(&minimum) >= 0,
            minimum_version: Some(minimum),
            found_version: Some(found),
        })
    }

    async fn ensure_minimum_version(&self) -> Result<(), PandoraError> {
        match self.is_satisfy_minimum_version().await? {
            VersionSatisfactionReport {
                is_satisfied: false,
                minimum_version: Some(required),
                found_version: Some(found),
            } => {
                warn!("Installed pandora {} is older than required {}", found, required);
                Err(PandoraError::VersionUnsatisfied { required, found })
            }
            _ => Ok(()),
        }
    }

    /// Encrypts `plain` with the engine.
    ///
    /// The returned cipher text is exactly what the engine produced.
    pub async fn encrypt(&self, plain: &str) -> Result<EncryptionReport, PandoraError> {
        self.ensure_minimum_version().await?;

        let encoded = encode_plain_text(plain);
        let envelope = self.execute_command(Command::Encrypt, &[encoded.as_str()]).await?;
        let result: EncryptionResult = decode_output(&envelope.data)?;

        Ok(EncryptionReport {
            application: envelope.initiator,
            cipher: result.encrypted,
        })
    }

    /// Decrypts `cipher` with the engine.
    pub async fn decrypt(&self, cipher: &str) -> Result<DecryptionReport, PandoraError> {
        self.ensure_minimum_version().await?;

        let envelope = self.execute_command(Command::Decrypt, &[cipher]).await?;
        let result: DecryptionResult = decode_output(&envelope.data)?;

        Ok(DecryptionReport {
            application: envelope.initiator,
            plain: decode_plain_text(&result.decrypted)?,
        })
    }
}
