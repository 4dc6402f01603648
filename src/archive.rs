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

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::Error;
use crate::path::archive_path;

/// Compress the file at `path` into a gzip archive next to it, returning the archive path.
///
/// The original file is left untouched.
pub(crate) fn compress(path: &Path) -> Result<PathBuf, Error> {
    let target = archive_path(path);
    let failed = |err: io::Error| Error::from_io_error("failed to compress log file", path, err);

    let mut source = File::open(path).map_err(failed)?;
    let archive = File::create(&target).map_err(failed)?;
    let mut encoder = GzEncoder::new(archive, Compression::default());
    let written = io::copy(&mut source, &mut encoder).and_then(|_| encoder.finish());

    match written {
        Ok(_) => Ok(target),
        Err(err) => {
            // best-effort; never leave a partial archive behind
            let _ = fs::remove_file(&target);
            Err(failed(err))
        }
    }
}
