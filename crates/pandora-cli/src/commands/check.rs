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

//! Implementation of the `check` command.
//!
//! Exits with an error when the installed engine is older than
//! `--min-version`.

use anyhow::{bail, Context, Result};
use pandora::{Pandora, VersionSatisfactionReport};

use super::print_json;

pub async fn run(pandora: &Pandora, as_json: bool) -> Result<()> {
    let report = pandora
        .is_satisfy_minimum_version()
        .await
        .context("Failed to check pandora version")?;
    if as_json {
        return print_json(&report);
    }
    println!("{}", describe(&report)?);
    Ok(())
}

fn describe(report: &VersionSatisfactionReport) -> Result<String> {
    match (report.minimum_version, report.found_version) {
        (Some(minimum), Some(found)) if report.is_satisfied => Ok(format!(
            "pandora {} satisfies minimum {}",
            found, minimum
        )),
        (Some(minimum), Some(found)) => {
            bail!("pandora {} does not satisfy minimum {}", found, minimum)
        }
        _ => Ok("no minimum version configured".to_string()),
    }
}
