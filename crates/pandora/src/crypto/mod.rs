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

//! Response authentication.
//!
//! Every envelope returned by the engine carries a detached Ed25519 signature
//! over its `data` field. This module checks that signature against the
//! engine's public key, which is compiled into the driver.

mod signing;

pub use signing::{verify, ENGINE_PUBLIC_KEY, ENGINE_PUBLIC_KEY_BASE64};
pub(crate) use signing::ResponseVerifier;

#[cfg(test)]
pub(crate) use signing::test_support;
