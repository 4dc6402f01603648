// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Serialize;

/// Output switches of a [`Logger`](crate::Logger).
///
/// Keys are camel-cased when (de)serialized, and missing keys take their default:
///
/// ```
/// use dayroll::Settings;
///
/// let settings: Settings = serde_json::from_str(r#"{"consoleEcho": false}"#).unwrap();
/// assert!(!settings.console_echo);
/// assert!(settings.include_attached_object);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Also write rendered lines to the console. Default to `true`.
    pub console_echo: bool,
    /// Append the attached object to the line, when one is given. Default to `true`.
    pub include_attached_object: bool,
    /// Write rendered lines to the per-severity files. Default to `true`.
    pub file_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console_echo: true,
            include_attached_object: true,
            file_output: true,
        }
    }
}
