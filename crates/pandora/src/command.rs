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

//! Engine commands and their static definitions.

use std::fmt;

/// How a command is spelled on the engine command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Name passed as the first engine argument
    pub name: &'static str,
    /// Whether the command carries `-a <application-guid>`
    pub requires_auth: bool,
}

/// Flag that precedes the application GUID on authenticated commands.
pub const AUTH_FLAG: &str = "-a";

const DECRYPT: CommandDefinition = CommandDefinition {
    name: "decrypt",
    requires_auth: true,
};

const ENCRYPT: CommandDefinition = CommandDefinition {
    name: "encrypt",
    requires_auth: true,
};

const VERSION: CommandDefinition = CommandDefinition {
    name: "version",
    requires_auth: false,
};

/// Commands understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Decrypt,
    Encrypt,
    Version,
}

impl Command {
    pub fn definition(&self) -> &'static CommandDefinition {
        match self {
            Command::Decrypt => &DECRYPT,
            Command::Encrypt => &ENCRYPT,
            Command::Version => &VERSION,
        }
    }

    /// Builds the full engine argument list for this command.
    ///
    /// The command name comes first, then the authentication flag and GUID
    /// when the command requires it, then `args`.
    pub fn build_args(&self, application_guid: &str, args: &[&str]) -> Vec<String> {
        let definition = self.definition();
        let mut command = Vec::with_capacity(args.len() + 3);
        command.push(definition.name.to_string());
        if definition.requires_auth {
            command.push(AUTH_FLAG.to_string());
            command.push(application_guid.to_string());
        }
        command.extend(args.iter().map(|arg| arg.to_string()));
        command
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}
