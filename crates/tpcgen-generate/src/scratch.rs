use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

/// Exclusively owned staging directory for one generator invocation.
///
/// The name carries a random token rather than a counter: concurrent
/// tasks, possibly in independent worker processes sharing a scratch
/// root, must never collide. The directory is removed recursively on
/// drop; removal failures are logged and suppressed so cleanup never
/// masks the primary error of the invocation.
#[derive(Debug)]
pub struct ScratchWorkspace {
    path: PathBuf,
}

impl ScratchWorkspace {
    pub fn create(root: &Path) -> io::Result<Self> {
        let path = root.join(format!("tpcgen_{}", Uuid::new_v4().simple()));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchWorkspace {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to remove scratch directory"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_is_removed_on_drop() {
        let root = std::env::temp_dir();
        let path = {
            let scratch = ScratchWorkspace::create(&root).expect("create scratch");
            assert!(scratch.path().is_dir());
            std::fs::write(scratch.path().join("leftover.dat"), b"x").expect("write file");
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn scratch_names_are_unique() {
        let root = std::env::temp_dir();
        let a = ScratchWorkspace::create(&root).expect("create a");
        let b = ScratchWorkspace::create(&root).expect("create b");
        assert_ne!(a.path(), b.path());
    }
}
