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

//! Bridge to the [`log`] crate.

use log::kv::Key;
use log::kv::VisitSource;
use serde_json::Map;
use serde_json::Value;

use crate::Logger;

impl Logger {
    /// Set up the global [`log`] logger with this [`Logger`] instance.
    ///
    /// Records of every level are accepted; `TRACE` records are written as `DEBUG`. Key-values
    /// of a record become its attached object.
    ///
    /// # Errors
    ///
    /// An error is returned if the global logger has already been set.
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let object = key_values(record);
        self.emit(record.level().into(), record.args(), object.as_ref());
    }

    fn flush(&self) {
        if let Err(err) = Logger::flush(self) {
            self.trap_error(&err);
        }
    }
}

struct KvCollector {
    kvs: Map<String, Value>,
}

impl<'kvs> VisitSource<'kvs> for KvCollector {
    fn visit_pair(
        &mut self,
        key: Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.kvs
            .insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }
}

fn key_values(record: &log::Record) -> Option<Value> {
    let mut collector = KvCollector { kvs: Map::new() };
    // SAFETY: visit_pair never fails.
    let _ = record.key_values().visit(&mut collector);
    if collector.kvs.is_empty() {
        None
    } else {
        Some(Value::Object(collector.kvs))
    }
}
