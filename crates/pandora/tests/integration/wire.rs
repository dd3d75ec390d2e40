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

//! Wire format and response authentication through the public API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pandora::crypto::{verify, ENGINE_PUBLIC_KEY_BASE64};
use pandora::encoding::{decode_output, decode_plain_text, encode_plain_text};
use pandora::response::{DecryptionResult, VersionResult};
use pandora::{DecodeError, Envelope, SemanticVersion};

/// A response as the engine prints it, with a signature that is not the
/// engine's.
const SAMPLE_ENVELOPE: &str = r#"{
    "success": true,
    "initiator": {"name": "Sample", "guid": "00000000-0000-0000-0000-000000000000", "author": "Pandora"},
    "message": "",
    "data": "eyJtYWpvciI6MCwibWlub3IiOjEsInBhdGNoIjozfQ==",
    "signature": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=="
}"#;

#[test]
fn test_decode_engine_envelope() {
    let wire = format!("{}\n", STANDARD.encode(SAMPLE_ENVELOPE));

    let envelope: Envelope = decode_output(&wire).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.initiator.name, "Sample");

    let version: VersionResult = decode_output(&envelope.data).unwrap();
    assert_eq!(
        SemanticVersion::new(version.major, version.minor, version.patch),
        SemanticVersion::new(0, 1, 3)
    );
}

#[test]
fn test_unsigned_envelope_fails_verification() {
    let envelope: Envelope = decode_output(&STANDARD.encode(SAMPLE_ENVELOPE)).unwrap();
    assert!(!verify(&envelope.data, &envelope.signature));
}

#[test]
fn test_verify_rejects_malformed_input() {
    assert!(!verify("data", "not base64 at all!"));
    assert!(!verify("data", ""));
    assert!(!verify("", ENGINE_PUBLIC_KEY_BASE64));
}

#[test]
fn test_plain_text_roundtrip() {
    let texts = [
        "Pandora Security Box",
        "",
        " leading and trailing ",
        "quotes \" and 'apostrophes' and $vars",
        "Grüße, 世界, مرحبا 🌍",
    ];
    for text in texts {
        assert_eq!(decode_plain_text(&encode_plain_text(text)).unwrap(), text);
    }
}

#[test]
fn test_decryption_payload_shape() {
    let payload = STANDARD.encode(format!(
        r#"{{"decrypted":"{}"}}"#,
        encode_plain_text("Pandora Security Box")
    ));
    let result: DecryptionResult = decode_output(&payload).unwrap();
    assert_eq!(
        decode_plain_text(&result.decrypted).unwrap(),
        "Pandora Security Box"
    );
}

#[test]
fn test_wrong_payload_shape_is_decode_error() {
    let payload = STANDARD.encode(r#"{"encrypted":"abc"}"#);
    let result = decode_output::<DecryptionResult>(&payload);
    assert!(matches!(result, Err(DecodeError::Json(_))));
}
