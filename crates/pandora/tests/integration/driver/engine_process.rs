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

//! Runs the driver against small shell scripts standing in for the engine.
//!
//! The scripts are not signed by the engine key, so any response they print
//! must be rejected; the tests cover everything up to and including that
//! check.

#![cfg(unix)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::{Signer, SigningKey};
use pandora::{ApplicationInfo, DriverConfig, Envelope, Pandora, PandoraError};
use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

const GUID: &str = "00000000-0000-0000-0000-000000000000";

fn install_engine(dir: &Path, body: &str) {
    let path = dir.join("pandora");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn driver_for(dir: &Path, timeout: Option<Duration>) -> Pandora {
    let config = DriverConfig::builder()
        .search_path(Some(dir.as_os_str().to_os_string()))
        .invocation_timeout(timeout)
        .build();
    Pandora::with_config(GUID, config)
}

/// An envelope signed by a key that is not the engine's.
fn forged_output() -> String {
    let key = SigningKey::generate(&mut rand::rngs::OsRng);
    let data = STANDARD.encode(r#"{"major":9,"minor":9,"patch":9}"#);
    let envelope = Envelope {
        success: true,
        initiator: ApplicationInfo::default(),
        message: String::new(),
        signature: STANDARD.encode(key.sign(data.as_bytes()).to_bytes()),
        data,
    };
    STANDARD.encode(serde_json::to_vec(&envelope).unwrap())
}

#[tokio::test]
#[serial]
async fn test_forged_response_is_rejected() {
    let dir = TempDir::new().unwrap();
    install_engine(dir.path(), &format!("printf '%s\\n' '{}'", forged_output()));
    let pandora = driver_for(dir.path(), Some(Duration::from_secs(10)));

    assert!(pandora.is_installed());
    let err = pandora.check_version().await.unwrap_err();
    assert!(matches!(err, PandoraError::InvalidSignature));
    assert_eq!(err.code(), 300);
}

#[tokio::test]
#[serial]
async fn test_arguments_reach_engine_unchanged() {
    let dir = TempDir::new().unwrap();
    let args_file = dir.path().join("args.txt");
    install_engine(
        dir.path(),
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\nprintf '%s\\n' '{}'",
            args_file.display(),
            forged_output()
        ),
    );
    let pandora = driver_for(dir.path(), Some(Duration::from_secs(10)));

    let result = pandora.encrypt("Pandora Security Box; rm -rf /").await;
    assert!(matches!(result, Err(PandoraError::InvalidSignature)));

    let args = fs::read_to_string(&args_file).unwrap();
    let expected = format!(
        "encrypt\n-a\n{}\n{}\n",
        GUID,
        STANDARD.encode("Pandora Security Box; rm -rf /")
    );
    assert_eq!(args, expected);
}

#[tokio::test]
#[serial]
async fn test_version_command_has_no_auth_flag() {
    let dir = TempDir::new().unwrap();
    let args_file = dir.path().join("args.txt");
    install_engine(
        dir.path(),
        &format!(
            "printf '%s\\n' \"$@\" > '{}'\nprintf '%s\\n' '{}'",
            args_file.display(),
            forged_output()
        ),
    );
    let pandora = driver_for(dir.path(), Some(Duration::from_secs(10)));

    let _ = pandora.check_version().await;

    assert_eq!(fs::read_to_string(&args_file).unwrap(), "version\n");
}

#[tokio::test]
#[serial]
async fn test_nonzero_exit_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    install_engine(dir.path(), "echo 'engine exploded' >&2\nexit 3");
    let pandora = driver_for(dir.path(), Some(Duration::from_secs(10)));

    match pandora.check_version().await {
        Err(PandoraError::EngineRuntime { reason }) => {
            assert!(reason.contains("engine exploded"), "reason: {}", reason);
        }
        other => panic!("Expected EngineRuntime, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_garbage_output_is_decode_error() {
    let dir = TempDir::new().unwrap();
    install_engine(dir.path(), "echo 'usage: pandora <command>'");
    let pandora = driver_for(dir.path(), Some(Duration::from_secs(10)));

    let err = pandora.check_version().await.unwrap_err();
    assert!(matches!(err, PandoraError::Decode(_)));
}

#[tokio::test]
#[serial]
async fn test_hung_engine_times_out() {
    let dir = TempDir::new().unwrap();
    install_engine(dir.path(), "sleep 30");
    let pandora = driver_for(dir.path(), Some(Duration::from_millis(300)));

    let started = std::time::Instant::now();
    let err = pandora.check_version().await.unwrap_err();

    match err {
        PandoraError::EngineTimeout { timeout } => {
            assert_eq!(timeout, Duration::from_millis(300))
        }
        other => panic!("Expected EngineTimeout, got {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_secs(10));
}
