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

//! Console targets for echoed log lines.

use std::fmt;
use std::io;
use std::io::Write;

use serde_json::Value;

use crate::Error;
use crate::Severity;

/// A console that rendered lines are echoed to.
///
/// The console decides where each severity goes and how an attached object is printed.
pub trait Console: fmt::Debug + Send + Sync + 'static {
    /// Write a rendered line, and the attached object if any, for the given severity.
    fn write(&self, severity: Severity, line: &str, object: Option<&Value>) -> Result<(), Error>;

    /// Flush any buffered output.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Console> From<T> for Box<dyn Console> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A console writing `INFO` and `DEBUG` lines to stdout, and `WARN` and `ERROR` lines to
/// stderr.
///
/// An attached object is pretty printed after the line, separated by a space.
///
/// # Examples
///
/// ```
/// use dayroll::console::Stdio;
///
/// let console = Stdio::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdio {}

impl Stdio {
    fn write_to(
        mut stream: impl Write,
        line: &str,
        object: Option<&Value>,
    ) -> Result<(), Error> {
        let text = match object {
            None => format!("{line}\n"),
            Some(object) => {
                let object = serde_json::to_string_pretty(object).map_err(|err| {
                    Error::new("failed to format attached object").with_source(err)
                })?;
                format!("{line} {object}\n")
            }
        };
        stream
            .write_all(text.as_bytes())
            .map_err(|err| Error::new("failed to write to console").with_source(err))
    }
}

impl Console for Stdio {
    fn write(&self, severity: Severity, line: &str, object: Option<&Value>) -> Result<(), Error> {
        match severity {
            Severity::Info | Severity::Debug => Self::write_to(io::stdout().lock(), line, object),
            Severity::Warn | Severity::Error => Self::write_to(io::stderr().lock(), line, object),
        }
    }

    fn flush(&self) -> Result<(), Error> {
        io::stdout()
            .flush()
            .and_then(|()| io::stderr().flush())
            .map_err(|err| Error::new("failed to flush console").with_source(err))
    }
}
