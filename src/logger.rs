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

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use serde::Serialize;
use serde_json::Value;

use crate::Console;
use crate::Error;
use crate::Settings;
use crate::Severity;
use crate::Template;
use crate::Trap;
use crate::clock::Clock;
use crate::console::Stdio;
use crate::rolling::RollingFiles;
use crate::template::Fields;
use crate::trap::DefaultTrap;

/// A builder to configure and create a [`Logger`].
#[derive(Debug)]
pub struct LoggerBuilder {
    // required
    namespace: String,
    basedir: PathBuf,

    // has default
    settings: Settings,
    template: Template,
    console: Box<dyn Console>,
    trap: Box<dyn Trap>,
    clock: Clock,
}

impl LoggerBuilder {
    /// Create a new logger builder for `namespace`, writing files under `basedir`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, basedir: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            basedir: basedir.into(),
            settings: Settings::default(),
            template: Template::default(),
            console: Box::new(Stdio::default()),
            trap: Box::new(DefaultTrap::default()),
            clock: Clock::DefaultClock,
        }
    }

    /// Set the output switches.
    ///
    /// Default to [`Settings::default`].
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the message template.
    ///
    /// Default to [`DEFAULT_TEMPLATE`](crate::template::DEFAULT_TEMPLATE).
    ///
    /// # Examples
    ///
    /// ```
    /// use dayroll::LoggerBuilder;
    ///
    /// let builder = LoggerBuilder::new("svc", "logs").template("%type% %message%");
    /// ```
    #[must_use]
    pub fn template(mut self, template: impl Into<Template>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the console that lines are echoed to.
    ///
    /// Default to [`Stdio`].
    #[must_use]
    pub fn console(mut self, console: impl Into<Box<dyn Console>>) -> Self {
        self.console = console.into();
        self
    }

    /// Set the trap for errors raised while logging.
    ///
    /// Default to [`DefaultTrap`].
    #[must_use]
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the [`Logger`].
    ///
    /// Unless file output is disabled, this creates the directories of the current day and
    /// opens one file per severity. A file already present at one of those paths is truncated.
    ///
    /// # Errors
    ///
    /// Return an error if a log directory or log file cannot be created.
    pub fn build(self) -> Result<Logger, Error> {
        let LoggerBuilder {
            namespace,
            basedir,
            settings,
            template,
            console,
            trap,
            clock,
        } = self;

        let files = if settings.file_output {
            Some(RollingFiles::open(basedir, &clock.now())?)
        } else {
            None
        };

        Ok(Logger {
            namespace,
            settings,
            template,
            console,
            trap,
            state: Mutex::new(State { clock, files }),
        })
    }
}

#[derive(Debug)]
struct State {
    clock: Clock,
    files: Option<RollingFiles>,
}

/// A namespaced logger writing one file per severity, rolled over daily.
///
/// Each line is rendered from the [`Template`], echoed to the [`Console`] and appended to the
/// file of its severity. The first line written on a new day still goes to the previous day's
/// file; after it is written, the previous files are compressed to `.gz` archives and removed,
/// and a new file per severity is opened for the new day.
///
/// Logging calls never fail: errors are handed to the [`Trap`]. Calls are serialized, so lines
/// from concurrent callers are never interleaved.
///
/// # Examples
///
/// ```
/// use dayroll::Logger;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Logger::new("svc", dir.path()).unwrap();
/// logger.info("boot");
/// logger.warn_with("slow request", &serde_json::json!({"ms": 1200}));
/// ```
#[derive(Debug)]
pub struct Logger {
    namespace: String,
    settings: Settings,
    template: Template,
    console: Box<dyn Console>,
    trap: Box<dyn Trap>,
    state: Mutex<State>,
}

impl Logger {
    /// Create a logger with default settings and template.
    ///
    /// # Errors
    ///
    /// Return an error if a log directory or log file cannot be created.
    pub fn new(namespace: impl Into<String>, basedir: impl Into<PathBuf>) -> Result<Logger, Error> {
        LoggerBuilder::new(namespace, basedir).build()
    }

    /// Create a [`LoggerBuilder`].
    #[must_use]
    pub fn builder(namespace: impl Into<String>, basedir: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(namespace, basedir)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the path of the file currently open for `severity`.
    ///
    /// Return `None` if file output is disabled, or if the file of the current day could not be
    /// opened yet.
    pub fn current_path(&self, severity: Severity) -> Option<PathBuf> {
        let state = self.state();
        let files = state.files.as_ref()?;
        files.current_path(severity).map(|path| path.to_path_buf())
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, message, None);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Severity::Warn, message, None);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, message, None);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, message, None);
    }

    /// Log an `INFO` line with an attached object.
    pub fn info_with<T: Serialize + ?Sized>(&self, message: impl fmt::Display, object: &T) {
        self.emit_with(Severity::Info, message, object);
    }

    /// Log a `WARN` line with an attached object.
    pub fn warn_with<T: Serialize + ?Sized>(&self, message: impl fmt::Display, object: &T) {
        self.emit_with(Severity::Warn, message, object);
    }

    /// Log a `DEBUG` line with an attached object.
    pub fn debug_with<T: Serialize + ?Sized>(&self, message: impl fmt::Display, object: &T) {
        self.emit_with(Severity::Debug, message, object);
    }

    /// Log an `ERROR` line with an attached object.
    pub fn error_with<T: Serialize + ?Sized>(&self, message: impl fmt::Display, object: &T) {
        self.emit_with(Severity::Error, message, object);
    }

    /// Log a line of the given severity.
    ///
    /// The attached object is only used if [`Settings::include_attached_object`] is on. In the
    /// file it is appended to the line as compact JSON in brackets, e.g.
    /// `[...] [INFO] [svc] [done][{"ms":12}]`.
    pub fn emit(&self, severity: Severity, message: impl fmt::Display, object: Option<&Value>) {
        let message = message.to_string();
        let object = object.filter(|_| self.settings.include_attached_object);

        let mut state = self.state();
        let now = state.clock.now();
        let date = now
            .timestamp()
            .strftime("%Y-%m-%dT%H:%M:%S.%3fZ")
            .to_string();
        let line = self.template.render(&Fields {
            date: &date,
            severity,
            namespace: &self.namespace,
            message: &message,
        });

        if self.settings.console_echo {
            if let Err(err) = self.console.write(severity, &line, object) {
                self.trap.trap(&err);
            }
        }

        let Some(files) = state.files.as_mut() else {
            return;
        };

        let mut bytes = line.into_bytes();
        if let Some(object) = object {
            match serde_json::to_vec(object) {
                Ok(json) => {
                    bytes.push(b'[');
                    bytes.extend_from_slice(&json);
                    bytes.push(b']');
                }
                Err(err) => {
                    let err = Error::new("failed to format attached object").with_source(err);
                    self.trap.trap(&err);
                }
            }
        }
        bytes.push(b'\n');

        if files.is_incomplete() {
            if let Err(err) = files.open_missing() {
                self.trap.trap(&err);
            }
        }
        if let Err(err) = files.write(severity, &bytes) {
            self.trap.trap(&err);
        }

        if files.should_rollover(&now) {
            if let Err(err) = files.rollover(&now, self.trap.as_ref()) {
                self.trap.trap(&err);
            }
        }
    }

    fn emit_with<T: Serialize + ?Sized>(
        &self,
        severity: Severity,
        message: impl fmt::Display,
        object: &T,
    ) {
        if !self.settings.include_attached_object {
            self.emit(severity, message, None);
            return;
        }

        match serde_json::to_value(object) {
            Ok(object) => self.emit(severity, message, Some(&object)),
            Err(err) => {
                let err = Error::new("failed to serialize attached object").with_source(err);
                self.trap.trap(&err);
                self.emit(severity, message, None);
            }
        }
    }

    /// Flush the console and the open log files.
    ///
    /// # Errors
    ///
    /// Return the first error met while flushing.
    pub fn flush(&self) -> Result<(), Error> {
        if self.settings.console_echo {
            self.console.flush()?;
        }
        match self.state().files.as_mut() {
            Some(files) => files.flush(),
            None => Ok(()),
        }
    }

    pub(crate) fn trap_error(&self, err: &Error) {
        self.trap.trap(err);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(test)]
    fn set_now(&self, now: jiff::Zoned) {
        self.state().clock.set_now(now);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(files) = state.files.as_mut() {
            let _ = files.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read;
    use std::path::Path;
    use std::str::FromStr;
    use std::sync::Arc;

    use flate2::read::GzDecoder;
    use jiff::Zoned;
    use rand::Rng;
    use rand::distr::Alphanumeric;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::clock::ManualClock;
    use crate::path::archive_path;
    use crate::path::log_path;
    use crate::trap::testing::RecordingTrap;

    type Captured = Arc<Mutex<Vec<(Severity, String, Option<Value>)>>>;

    #[derive(Debug, Clone, Default)]
    struct CapturingConsole {
        lines: Captured,
    }

    impl Console for CapturingConsole {
        fn write(
            &self,
            severity: Severity,
            line: &str,
            object: Option<&Value>,
        ) -> Result<(), Error> {
            let entry = (severity, line.to_string(), object.cloned());
            self.lines.lock().unwrap().push(entry);
            Ok(())
        }
    }

    fn zoned(s: &str) -> Zoned {
        Zoned::from_str(s).unwrap()
    }

    fn build(dir: &Path, start: &Zoned, settings: Settings) -> (Logger, CapturingConsole) {
        let console = CapturingConsole::default();
        let logger = LoggerBuilder::new("svc", dir)
            .settings(settings)
            .console(console.clone())
            .trap(RecordingTrap::default())
            .clock(Clock::ManualClock(ManualClock::new(start.clone())))
            .build()
            .unwrap();
        (logger, console)
    }

    fn read(path: impl AsRef<Path>) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn gunzip(path: impl AsRef<Path>) -> String {
        let mut content = String::new();
        GzDecoder::new(fs::File::open(path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }

    #[test]
    fn test_lines_are_rendered_and_routed() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52.123[UTC]");
        let (logger, console) = build(temp_dir.path(), &now, Settings::default());

        logger.info("boot");
        logger.warn("careful");
        logger.debug(format_args!("{} items", 3));
        logger.error("broken");

        let path = |severity| log_path(temp_dir.path(), severity, &now);
        assert_eq!(
            read(path(Severity::Info)),
            "[2024-08-10T09:12:52.123Z] [INFO] [svc] [boot]\n"
        );
        assert_eq!(
            read(path(Severity::Warn)),
            "[2024-08-10T09:12:52.123Z] [WARN] [svc] [careful]\n"
        );
        assert_eq!(
            read(path(Severity::Debug)),
            "[2024-08-10T09:12:52.123Z] [DEBUG] [svc] [3 items]\n"
        );
        assert_eq!(
            read(path(Severity::Error)),
            "[2024-08-10T09:12:52.123Z] [ERROR] [svc] [broken]\n"
        );

        let lines = console.lines.lock().unwrap();
        let severities = lines.iter().map(|(s, _, _)| *s).collect::<Vec<_>>();
        assert_eq!(severities, Severity::ALL);
        assert_eq!(lines[0].1, "[2024-08-10T09:12:52.123Z] [INFO] [svc] [boot]");
    }

    #[test]
    fn test_last_line_is_the_rendered_message() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let (logger, _) = build(temp_dir.path(), &now, Settings::default());

        for severity in Severity::ALL {
            for _ in 0..10 {
                logger.emit(severity, generate_random_string(), None);
            }
            let message = generate_random_string();
            logger.emit(severity, &message, None);

            let content = read(log_path(temp_dir.path(), severity, &now));
            assert_eq!(content.lines().count(), 11);
            assert_eq!(
                content.lines().last().unwrap(),
                format!("[2024-08-10T09:12:52.000Z] [{severity}] [svc] [{message}]")
            );
        }
    }

    #[test]
    fn test_attached_object() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let (logger, console) = build(temp_dir.path(), &now, Settings::default());

        logger.info_with("done", &json!({"ms": 12}));

        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Info, &now)),
            "[2024-08-10T09:12:52.000Z] [INFO] [svc] [done][{\"ms\":12}]\n"
        );
        let lines = console.lines.lock().unwrap();
        assert_eq!(lines[0].1, "[2024-08-10T09:12:52.000Z] [INFO] [svc] [done]");
        assert_eq!(lines[0].2, Some(json!({"ms": 12})));
    }

    #[test]
    fn test_attached_object_can_be_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let settings = Settings {
            include_attached_object: false,
            ..Settings::default()
        };
        let (logger, console) = build(temp_dir.path(), &now, settings);

        logger.error_with("failed", &json!({"code": 500}));
        logger.emit(Severity::Error, "again", Some(&json!([1, 2])));

        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Error, &now)),
            "[2024-08-10T09:12:52.000Z] [ERROR] [svc] [failed]\n\
             [2024-08-10T09:12:52.000Z] [ERROR] [svc] [again]\n"
        );
        let lines = console.lines.lock().unwrap();
        assert!(lines.iter().all(|(_, _, object)| object.is_none()));
    }

    #[test]
    fn test_console_echo_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let settings = Settings {
            console_echo: false,
            ..Settings::default()
        };
        let (logger, console) = build(temp_dir.path(), &now, settings);

        logger.warn_with("quiet", &json!({"a": 1}));

        assert!(console.lines.lock().unwrap().is_empty());
        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Warn, &now)),
            "[2024-08-10T09:12:52.000Z] [WARN] [svc] [quiet][{\"a\":1}]\n"
        );
    }

    #[test]
    fn test_file_output_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let settings = Settings {
            file_output: false,
            ..Settings::default()
        };
        let (logger, console) = build(temp_dir.path(), &now, settings);

        logger.info("console only");
        logger.set_now(zoned("2024-08-11T09:12:52[UTC]"));
        logger.info("still console only");

        assert_eq!(console.lines.lock().unwrap().len(), 2);
        assert_eq!(logger.current_path(Severity::Info), None);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
        logger.flush().unwrap();
    }

    #[test]
    fn test_rollover_after_writing_the_first_line_of_a_new_day() {
        let temp_dir = TempDir::new().unwrap();
        let day1 = zoned("2024-08-10T23:58:00[UTC]");
        let day2 = zoned("2024-08-11T00:01:00[UTC]");
        let (logger, _) = build(temp_dir.path(), &day1, Settings::default());

        logger.info("late");
        logger.set_now(day2.clone());
        logger.info("midnight");
        logger.set_now(zoned("2024-08-11T00:02:00[UTC]"));
        logger.info("morning");

        let old = log_path(temp_dir.path(), Severity::Info, &day1);
        assert!(!old.exists());
        assert_eq!(
            gunzip(archive_path(&old)),
            "[2024-08-10T23:58:00.000Z] [INFO] [svc] [late]\n\
             [2024-08-11T00:01:00.000Z] [INFO] [svc] [midnight]\n"
        );
        for severity in [Severity::Warn, Severity::Debug, Severity::Error] {
            let old = log_path(temp_dir.path(), severity, &day1);
            assert!(!old.exists());
            assert_eq!(gunzip(archive_path(&old)), "");
        }

        let new = log_path(temp_dir.path(), Severity::Info, &day2);
        assert_eq!(new, temp_dir.path().join("info/2024/August/11-00_01.log"));
        assert_eq!(logger.current_path(Severity::Info), Some(new.clone()));
        assert_eq!(
            read(new),
            "[2024-08-11T00:02:00.000Z] [INFO] [svc] [morning]\n"
        );
    }

    #[test]
    fn test_no_rollover_within_the_same_day() {
        let temp_dir = TempDir::new().unwrap();
        let start = zoned("2024-08-10T00:00:00[UTC]");
        let (logger, _) = build(temp_dir.path(), &start, Settings::default());

        let mut now = start.clone();
        for _ in 0..24 {
            logger.set_now(now.clone());
            logger.debug(generate_random_string());
            now = now.checked_add(jiff::Span::new().hours(1)).unwrap();
        }

        let path = log_path(temp_dir.path(), Severity::Debug, &start);
        assert_eq!(logger.current_path(Severity::Debug), Some(path.clone()));
        assert_eq!(read(path).lines().count(), 24);
        assert!(!archive_path(logger.current_path(Severity::Info).unwrap()).exists());
    }

    #[test]
    fn test_rollover_survives_a_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let trap = RecordingTrap::default();
        let day1 = zoned("2024-08-10T12:00:00[UTC]");
        let day2 = zoned("2024-08-11T12:00:00[UTC]");
        let logger = LoggerBuilder::new("svc", temp_dir.path())
            .settings(Settings {
                console_echo: false,
                ..Settings::default()
            })
            .trap(trap.clone())
            .clock(Clock::ManualClock(ManualClock::new(day1.clone())))
            .build()
            .unwrap();

        let removed = log_path(temp_dir.path(), Severity::Error, &day1);
        fs::remove_file(&removed).unwrap();

        logger.set_now(day2.clone());
        logger.info("rolls over");
        logger.error("lands in the new file");

        let errors = trap.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, Some(removed.display().to_string()));
        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Error, &day2)),
            "[2024-08-11T12:00:00.000Z] [ERROR] [svc] [lands in the new file]\n"
        );
    }

    #[test]
    fn test_partial_rollover_keeps_lines_of_the_new_day() {
        let temp_dir = TempDir::new().unwrap();
        let trap = RecordingTrap::default();
        let day1 = zoned("2024-08-10T12:00:00[UTC]");
        let day2 = zoned("2024-08-11T12:00:00[UTC]");
        let logger = LoggerBuilder::new("svc", temp_dir.path())
            .settings(Settings {
                console_echo: false,
                ..Settings::default()
            })
            .trap(trap.clone())
            .clock(Clock::ManualClock(ManualClock::new(day1.clone())))
            .build()
            .unwrap();

        logger.info("day one");
        // a plain file where the warn directory must go
        let blocker = temp_dir.path().join("warn/2024/August");
        fs::remove_dir_all(&blocker).unwrap();
        fs::write(&blocker, "").unwrap();

        logger.set_now(day2.clone());
        logger.info("trigger");
        logger.info("day two line one");
        logger.info("day two line two");
        logger.warn("nowhere to go");
        logger.info("day two line three");

        assert!(!trap.errors().is_empty());
        let info = log_path(temp_dir.path(), Severity::Info, &day2);
        assert_eq!(
            read(&info),
            "[2024-08-11T12:00:00.000Z] [INFO] [svc] [day two line one]\n\
             [2024-08-11T12:00:00.000Z] [INFO] [svc] [day two line two]\n\
             [2024-08-11T12:00:00.000Z] [INFO] [svc] [day two line three]\n"
        );
        assert!(!archive_path(&info).exists());
        assert_eq!(
            gunzip(archive_path(log_path(temp_dir.path(), Severity::Info, &day1))),
            "[2024-08-10T12:00:00.000Z] [INFO] [svc] [day one]\n\
             [2024-08-11T12:00:00.000Z] [INFO] [svc] [trigger]\n"
        );
        assert_eq!(logger.current_path(Severity::Warn), None);
        assert_eq!(
            logger.current_path(Severity::Debug),
            Some(log_path(temp_dir.path(), Severity::Debug, &day2))
        );

        fs::remove_file(&blocker).unwrap();
        logger.warn("back");
        let warn = log_path(temp_dir.path(), Severity::Warn, &day2);
        assert_eq!(logger.current_path(Severity::Warn), Some(warn.clone()));
        assert_eq!(
            read(warn),
            "[2024-08-11T12:00:00.000Z] [WARN] [svc] [back]\n"
        );
    }

    #[test]
    fn test_second_logger_truncates_the_first() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let (first, _) = build(temp_dir.path(), &now, Settings::default());
        first.info("from first");

        let path = log_path(temp_dir.path(), Severity::Info, &now);
        assert!(!read(&path).is_empty());

        let (_second, _) = build(temp_dir.path(), &now, Settings::default());
        assert_eq!(read(&path), "");
    }

    #[test]
    fn test_custom_template() {
        let temp_dir = TempDir::new().unwrap();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let logger = LoggerBuilder::new("api", temp_dir.path())
            .settings(Settings {
                console_echo: false,
                ..Settings::default()
            })
            .template("%namespace%|%type%|%message%")
            .clock(Clock::ManualClock(ManualClock::new(now.clone())))
            .build()
            .unwrap();

        logger.warn("%type% is %date%");
        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Warn, &now)),
            "api|WARN|%type% is %date%\n"
        );
    }

    #[test]
    fn test_unserializable_object_is_trapped() {
        struct Unserializable;

        impl Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not today"))
            }
        }

        let temp_dir = TempDir::new().unwrap();
        let trap = RecordingTrap::default();
        let now = zoned("2024-08-10T09:12:52[UTC]");
        let logger = LoggerBuilder::new("svc", temp_dir.path())
            .console(CapturingConsole::default())
            .trap(trap.clone())
            .clock(Clock::ManualClock(ManualClock::new(now.clone())))
            .build()
            .unwrap();

        logger.info_with("payload", &Unserializable);

        assert_eq!(trap.errors()[0].0, "failed to serialize attached object");
        assert_eq!(
            read(log_path(temp_dir.path(), Severity::Info, &now)),
            "[2024-08-10T09:12:52.000Z] [INFO] [svc] [payload]\n"
        );
    }
}
