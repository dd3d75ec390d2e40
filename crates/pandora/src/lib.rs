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

//! # Pandora
//!
//! Client driver for the Pandora security engine.
//!
//! The driver never encrypts anything itself. It runs the separately installed
//! `pandora` executable, decodes its output, and checks that every response
//! was signed by the engine's Ed25519 key before trusting it. Encryption and
//! decryption can be gated on a minimum engine version.
//!
//! ```rust,ignore
//! use pandora::{Pandora, SemanticVersion};
//!
//! let mut pandora = Pandora::new("00000000-0000-0000-0000-000000000000");
//! pandora.set_minimum_version(SemanticVersion::new(0, 1, 2));
//!
//! let encrypted = pandora.encrypt("Pandora Security Box").await?;
//! let decrypted = pandora.decrypt(&encrypted.cipher).await?;
//! assert_eq!(decrypted.plain, "Pandora Security Box");
//! ```

pub mod command;
pub mod crypto;
pub mod driver;
pub mod encoding;
pub mod error;
pub mod executable;
pub mod reports;
pub mod response;
pub mod version;

pub use command::{Command, CommandDefinition};
pub use driver::{DriverConfig, DriverConfigBuilder, Pandora};
pub use error::{DecodeError, ErrorCode, PandoraError};
pub use executable::{EngineInvoker, Executable};
pub use reports::{DecryptionReport, EncryptionReport, VersionSatisfactionReport};
pub use response::{ApplicationInfo, Envelope};
pub use version::SemanticVersion;
