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

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Error;
use crate::Severity;
use crate::Trap;
use crate::archive;
use crate::path;

/// An open log file of one severity.
#[derive(Debug)]
struct OutputFile {
    path: PathBuf,
    writer: File,
}

impl OutputFile {
    // Truncates any file already at the path.
    fn open(dir: PathBuf, filename: &str) -> Result<Self, Error> {
        fs::create_dir_all(&dir)
            .map_err(|err| Error::from_io_error("failed to create log directory", &dir, err))?;

        let path = dir.join(filename);
        let writer = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|err| Error::from_io_error("failed to create log file", &path, err))?;

        Ok(Self { path, writer })
    }

    /// Compress the file into a `.gz` sibling, close it and remove it.
    ///
    /// Best-effort: if compression fails the error is trapped and the file is left in place.
    /// A failed removal after a successful compression is ignored.
    fn retire(self, trap: &dyn Trap) {
        let OutputFile { path, mut writer } = self;

        if let Err(err) = writer.flush() {
            let err = Error::from_io_error("failed to flush log file", &path, err);
            trap.trap(&err);
        }

        let compressed = archive::compress(&path);
        drop(writer);

        match compressed {
            Ok(_) => {
                // best-effort
                let _ = fs::remove_file(&path);
            }
            Err(err) => trap.trap(&err),
        }
    }
}

/// The four log files of the current day, one per severity.
#[derive(Debug)]
pub(crate) struct RollingFiles {
    basedir: PathBuf,
    // the moment the current generation was opened; names its files
    opened_at: Zoned,
    files: BTreeMap<Severity, OutputFile>,
}

impl RollingFiles {
    /// Create the directories and open a file per severity for `now`.
    pub fn open(basedir: PathBuf, now: &Zoned) -> Result<Self, Error> {
        let mut files = RollingFiles {
            basedir,
            opened_at: now.clone(),
            files: BTreeMap::new(),
        };
        files.open_missing()?;
        Ok(files)
    }

    /// Append `bytes` to the file of `severity`; does nothing if no such file is open.
    pub fn write(&mut self, severity: Severity, bytes: &[u8]) -> Result<(), Error> {
        let Some(file) = self.files.get_mut(&severity) else {
            return Ok(());
        };
        file.writer
            .write_all(bytes)
            .map_err(|err| Error::from_io_error("failed to write log file", &file.path, err))
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        for file in self.files.values_mut() {
            file.writer
                .flush()
                .map_err(|err| Error::from_io_error("failed to flush log file", &file.path, err))?;
        }
        Ok(())
    }

    pub fn current_path(&self, severity: Severity) -> Option<&Path> {
        self.files.get(&severity).map(|file| file.path.as_path())
    }

    #[cfg(test)]
    pub fn current_date(&self) -> jiff::civil::Date {
        self.opened_at.date()
    }

    pub fn should_rollover(&self, now: &Zoned) -> bool {
        now.date() != self.opened_at.date()
    }

    /// Whether a severity has no open file, because opening it failed.
    pub fn is_incomplete(&self) -> bool {
        self.files.len() < Severity::ALL.len()
    }

    /// Retire the open files, in severity order, and open a new generation for `now`.
    ///
    /// Failures to archive the old files go to the trap and do not stop the new generation
    /// from being opened. The date advances as soon as the old files are retired; a failure
    /// to open a file of the new generation is returned, and [`Self::open_missing`] opens it
    /// later under the same name.
    pub fn rollover(&mut self, now: &Zoned, trap: &dyn Trap) -> Result<(), Error> {
        for severity in Severity::ALL {
            if let Some(file) = self.files.remove(&severity) {
                file.retire(trap);
            }
        }
        self.opened_at = now.clone();
        self.open_missing()
    }

    /// Open the file of every severity of the current generation that is not open yet.
    ///
    /// A severity that fails to open does not keep the others from opening; the first error
    /// is returned.
    pub fn open_missing(&mut self) -> Result<(), Error> {
        let filename = path::log_filename(&self.opened_at);
        let mut result = Ok(());
        for severity in Severity::ALL {
            if self.files.contains_key(&severity) {
                continue;
            }
            let dir = path::log_dir(&self.basedir, severity, &self.opened_at);
            match OutputFile::open(dir, &filename) {
                Ok(file) => {
                    self.files.insert(severity, file);
                }
                Err(err) => {
                    if result.is_ok() {
                        result = Err(err);
                    }
                }
            }
        }
        result
    }
}
