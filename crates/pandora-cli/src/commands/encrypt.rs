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

//! Implementation of the `encrypt` command.

use anyhow::{Context, Result};
use pandora::Pandora;
use tracing::info;

use super::print_json;

pub async fn run(pandora: &Pandora, text: &str, as_json: bool) -> Result<()> {
    let report = pandora.encrypt(text).await.context("Encryption failed")?;
    info!(
        "Encrypted for {} ({})",
        report.application.name, report.application.guid
    );
    if as_json {
        return print_json(&report);
    }
    println!("{}", report.cipher);
    Ok(())
}
