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

//! On-disk layout of the log files.
//!
//! Log files live at `<basedir>/<severity>/<year>/<MonthName>/<DD>-<HH>_<MM>.log`, where the date
//! components are those of the moment the file was opened. Tools harvesting the logs rely on
//! this layout, so it must not change.

use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Severity;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Return the English name of a month numbered from 1, or `None` if `month` is not in `1..=12`.
pub fn month_name(month: i8) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

fn month_dirname(at: &Zoned) -> &'static str {
    // jiff months are always in 1..=12
    MONTH_NAMES[at.month() as usize - 1]
}

/// Return the directory holding the `severity` file opened at `at`.
pub fn log_dir(basedir: impl AsRef<Path>, severity: Severity, at: &Zoned) -> PathBuf {
    basedir
        .as_ref()
        .join(severity.dirname())
        .join(format!("{:04}", at.year()))
        .join(month_dirname(at))
}

/// Return the file name of the files opened at `at`.
pub fn log_filename(at: &Zoned) -> String {
    format!("{:02}-{:02}_{:02}.log", at.day(), at.hour(), at.minute())
}

/// Return the full path of the `severity` file opened at `at`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use dayroll::Severity;
/// use dayroll::path::log_path;
///
/// let at: jiff::Zoned = "2024-08-05T07:03:00[UTC]".parse().unwrap();
/// let path = log_path("logs", Severity::Warn, &at);
/// assert_eq!(path, Path::new("logs/warn/2024/August/05-07_03.log"));
/// ```
pub fn log_path(basedir: impl AsRef<Path>, severity: Severity, at: &Zoned) -> PathBuf {
    log_dir(basedir, severity, at).join(log_filename(at))
}

/// Return the path a log file is archived to, which is the same path with `.gz` appended.
pub fn archive_path(path: impl AsRef<Path>) -> PathBuf {
    let mut archive = path.as_ref().as_os_str().to_owned();
    archive.push(".gz");
    PathBuf::from(archive)
}
