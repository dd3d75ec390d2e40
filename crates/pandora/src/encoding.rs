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

//! Wire encoding used by the engine.
//!
//! Engine output is base64 text that decodes to UTF-8 JSON. Plain text sent to
//! the engine is base64 of its UTF-8 bytes.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Standard alphabet, padding optional on decode.
pub(crate) const WIRE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes base64 engine output into a typed structure.
///
/// Surrounding whitespace (the engine terminates its output with a newline) is
/// ignored. Any failure along the way is reported; partial data is never
/// returned.
pub fn decode_output<T: DeserializeOwned>(src: &str) -> Result<T, DecodeError> {
    let bytes = WIRE.decode(src.trim().as_bytes())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Encodes plain text for transport to the engine.
pub fn encode_plain_text(src: &str) -> String {
    STANDARD.encode(src.as_bytes())
}

/// Decodes base64 plain text returned by the engine.
pub fn decode_plain_text(src: &str) -> Result<String, DecodeError> {
    let bytes = WIRE.decode(src.trim().as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
