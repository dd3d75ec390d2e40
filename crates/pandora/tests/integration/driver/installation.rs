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

//! Installation detection through the public driver API.

use pandora::{DriverConfig, Pandora, PandoraError};
use std::fs::File;
use tempfile::TempDir;

const GUID: &str = "00000000-0000-0000-0000-000000000000";

/// A driver whose search path contains only `dirs`.
fn driver_searching(dirs: &[&std::path::Path]) -> Pandora {
    let config = DriverConfig::builder()
        .search_path(Some(std::env::join_paths(dirs).unwrap()))
        .build();
    Pandora::with_config(GUID, config)
}

#[test]
fn test_not_installed_on_process_path() {
    let config = DriverConfig::builder()
        .engine_name("pandora-engine-that-is-never-installed")
        .build();
    let pandora = Pandora::with_config(GUID, config);

    assert!(!pandora.is_installed());
    assert!(!pandora.is_installed());
}

#[test]
fn test_not_installed_in_empty_directories() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    File::create(second.path().join("pandora.txt")).unwrap();

    let pandora = driver_searching(&[first.path(), second.path()]);

    assert!(!pandora.is_installed());
}

#[test]
fn test_installed_when_binary_present() {
    let empty = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    File::create(bin.path().join("pandora")).unwrap();

    let pandora = driver_searching(&[empty.path(), bin.path()]);

    assert!(pandora.is_installed());
    assert_eq!(pandora.application_guid(), GUID);
}

#[tokio::test]
async fn test_operations_fail_when_not_installed() {
    let empty = TempDir::new().unwrap();
    let mut pandora = driver_searching(&[empty.path()]);

    let err = pandora.check_version().await.unwrap_err();
    assert!(matches!(err, PandoraError::EngineNotInstalled));
    assert_eq!(err.code(), 100);
    assert_eq!(err.to_string(), "pandora is not installed");

    // Without a minimum version the encrypt path reaches the engine lookup.
    assert!(matches!(
        pandora.encrypt("text").await,
        Err(PandoraError::EngineNotInstalled)
    ));

    pandora.set_minimum_version("0.1.2".parse().unwrap());
    assert!(matches!(
        pandora.is_satisfy_minimum_version().await,
        Err(PandoraError::EngineNotInstalled)
    ));
    assert!(matches!(
        pandora.decrypt("cipher").await,
        Err(PandoraError::EngineNotInstalled)
    ));
}

#[tokio::test]
async fn test_no_minimum_needs_no_engine() {
    let empty = TempDir::new().unwrap();
    let pandora = driver_searching(&[empty.path()]);

    let report = pandora.is_satisfy_minimum_version().await.unwrap();
    assert!(report.is_satisfied);
    assert!(report.minimum_version.is_none());
    assert!(report.found_version.is_none());
}
