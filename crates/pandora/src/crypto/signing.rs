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

//! Ed25519 detached signature verification for engine responses.

use base64::Engine;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::debug;

use crate::encoding::WIRE;

/// Base64 form of the engine's Ed25519 public key.
pub const ENGINE_PUBLIC_KEY_BASE64: &str = "Y/97DVIGeTgOzFW7j+vXS8g8j0UUcum3g50QfO1CH+c=";

/// The engine's Ed25519 public key.
pub const ENGINE_PUBLIC_KEY: [u8; 32] = [
    99, 255, 123, 13, 82, 6, 121, 56, 14, 204, 85, 187, 143, 235, 215, 75, 200, 60, 143, 69, 20,
    114, 233, 183, 131, 157, 16, 124, 237, 66, 31, 231,
];

/// Verifies a base64 detached signature over `data` with the engine key.
///
/// `data` is checked as raw bytes, exactly as received. Returns `false` for
/// any malformed input rather than an error; callers decide whether a failed
/// check is fatal.
pub fn verify(data: &str, signature: &str) -> bool {
    verify_with_key(&ENGINE_PUBLIC_KEY, data, signature)
}

fn verify_with_key(public_key: &[u8; 32], data: &str, signature: &str) -> bool {
    let sig_bytes = match WIRE.decode(signature.trim().as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Signature is not valid base64: {}", e);
            return false;
        }
    };

    let sig = match Signature::from_slice(&sig_bytes) {
        Ok(sig) => sig,
        Err(_) => {
            debug!(
                "Signature has wrong length: expected 64 bytes, got {}",
                sig_bytes.len()
            );
            return false;
        }
    };

    let verifying_key = match VerifyingKey::from_bytes(public_key) {
        Ok(key) => key,
        Err(e) => {
            debug!("Public key rejected: {}", e);
            return false;
        }
    };

    verifying_key.verify(data.as_bytes(), &sig).is_ok()
}

/// Verifier bound to a single public key.
///
/// Production drivers always use [`ENGINE_PUBLIC_KEY`].
#[derive(Debug, Clone)]
pub(crate) struct ResponseVerifier {
    public_key: [u8; 32],
}

impl Default for ResponseVerifier {
    fn default() -> Self {
        Self {
            public_key: ENGINE_PUBLIC_KEY,
        }
    }
}

impl ResponseVerifier {
    #[cfg(test)]
    pub(crate) fn with_public_key(public_key: [u8; 32]) -> Self {
        Self { public_key }
    }

    pub(crate) fn verify(&self, data: &str, signature: &str) -> bool {
        verify_with_key(&self.public_key, data, signature)
    }
}
