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

//! A namespaced logger writing one file per severity, rolled over and compressed daily.
//!
//! # Overview
//!
//! A [`Logger`] renders every message through a [`Template`], echoes the line to a [`Console`]
//! and appends it to the file of its [`Severity`]. Files are laid out as
//! `<basedir>/<severity>/<year>/<MonthName>/<DD>-<HH>_<MM>.log`; when a line is written on a
//! new calendar day, the files of the previous day are compressed to `.gz` archives and new
//! files are opened.
//!
//! # Examples
//!
//! ```
//! use dayroll::Logger;
//! use dayroll::Settings;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder("svc", dir.path())
//!     .settings(Settings {
//!         console_echo: false,
//!         ..Settings::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! logger.info("boot");
//! logger.error_with("request failed", &serde_json::json!({"status": 503}));
//! ```
//!
//! The logger can also serve as the backend of the [`log`] crate:
//!
//! ```no_run
//! let logger = dayroll::Logger::new("svc", "logs").unwrap();
//! logger.apply().unwrap();
//!
//! log::info!(user = "alice"; "login");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod console;
pub mod path;
pub mod template;
pub mod trap;

pub use self::console::Console;
pub use self::error::Error;
pub use self::logger::Logger;
pub use self::logger::LoggerBuilder;
pub use self::path::log_path;
pub use self::settings::Settings;
pub use self::severity::Severity;
pub use self::template::Template;
pub use self::trap::Trap;

mod archive;
mod bridge;
mod clock;
mod error;
mod logger;
mod rolling;
mod settings;
mod severity;
