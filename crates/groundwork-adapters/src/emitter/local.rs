//! Local filesystem emitter using std::fs.

use std::io;
use std::path::Path;

use groundwork_core::{application::ports::Emitter, error::GroundworkResult};

/// Production emitter backed by `std::fs`.
///
/// Writes are overwrite-in-place: re-running a scaffold refreshes generated
/// files and leaves everything else alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEmitter;

impl LocalEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Emitter for LocalEmitter {
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GroundworkResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> groundwork_core::error::GroundworkError {
    use groundwork_core::application::ApplicationError;

    ApplicationError::EmitFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}
