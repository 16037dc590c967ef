//! Durable per-cardinality result output.
//!
//! Each grown level (cardinality >= 2) is written to its own file as soon as
//! the level completes, one line per surviving path:
//!
//! ```text
//! <seg1>, <seg2>, ..., <segk>;<support>;{<trip_id1>, <trip_id2>, ...};
//! ```
//!
//! Fields are `;`-separated, both lists are comma-space separated, the
//! trip-id list is wrapped in braces, and there is no header line. A new run
//! truncates any prior file for the same cardinality. The cardinality-1 set
//! is an in-memory seed only and is never written.

use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{FrequentPath, FrequentSet, Result};

/// Destination for completed frequent-set levels.
///
/// The mining session calls this once per grown level, in cardinality order.
/// An error is fatal for the run; levels already written stay valid.
pub trait LevelSink {
    /// Persist one completed level.
    fn write_level(&mut self, level: &FrequentSet) -> Result<()>;
}

/// Render one frequent path as its output line (without the newline).
pub fn format_path(path: &FrequentPath) -> String {
    format!(
        "{};{};{{{}}};",
        path.segments.join(", "),
        path.support,
        path.trip_ids.join(", ")
    )
}

/// File-per-cardinality sink writing `frequent_paths_<k>` files.
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    /// Create a sink writing into the given directory. The directory is
    /// created if it does not exist.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// Path of the output file for one cardinality.
    pub fn level_path(&self, cardinality: usize) -> PathBuf {
        self.directory.join(format!("frequent_paths_{cardinality}"))
    }

    /// Output directory for this sink.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl LevelSink for FileSink {
    fn write_level(&mut self, level: &FrequentSet) -> Result<()> {
        let path = self.level_path(level.cardinality);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        for frequent_path in &level.paths {
            writeln!(writer, "{}", format_path(frequent_path))?;
        }
        writer.flush()?;

        info!(
            "wrote {} paths of cardinality {} to {}",
            level.len(),
            level.cardinality,
            path.display()
        );
        Ok(())
    }
}

/// In-memory sink capturing completed levels, mainly for tests and the
/// run-summary export.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Captured levels in write order.
    pub levels: Vec<FrequentSet>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LevelSink for MemorySink {
    fn write_level(&mut self, level: &FrequentSet) -> Result<()> {
        self.levels.push(level.clone());
        Ok(())
    }
}
