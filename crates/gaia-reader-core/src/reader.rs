use std::io;
use std::path::{Path, PathBuf};

use crate::config::DiskSettings;
use crate::error::{ReaderError, ReaderResult};
use crate::resolution::Resolution;
use crate::sidecar::{self, METADATA_DIR_NAME};

/// Read-path resolver over a disk-backed storage root.
///
/// Holds the immutable storage root configured at startup. Each [`resolve`]
/// call is independent, read-only, and idempotent against unchanged disk
/// state, so concurrent resolutions need no coordination. The underlying
/// storage is externally owned and may change between or during calls; no
/// lock is taken, and a benign race between the two probes yields a stale or
/// fallback content type rather than an error.
///
/// [`resolve`]: DiskReader::resolve
#[derive(Debug)]
pub struct DiskReader {
    storage_root: PathBuf,
}

impl DiskReader {
    /// Construct a reader over an existing storage root.
    ///
    /// The root must already exist and be a directory; it is never created.
    pub fn open(settings: DiskSettings) -> ReaderResult<Self> {
        let root = settings.storage_root_directory;
        match std::fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(Self { storage_root: root }),
            Ok(_) => Err(ReaderError::StorageRoot {
                path: root,
                reason: "not a directory".into(),
            }),
            Err(err) => Err(ReaderError::StorageRoot {
                path: root,
                reason: err.to_string(),
            }),
        }
    }

    /// The storage root this reader resolves under.
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// The file holding the object's bytes. Checked for existence, never read.
    fn primary_path(&self, bucket: &str, relative_path: &str) -> PathBuf {
        self.storage_root.join(bucket).join(relative_path)
    }

    /// The sidecar path, mirroring the object's bucket/path structure under
    /// the reserved metadata directory.
    fn sidecar_path(&self, bucket: &str, relative_path: &str) -> PathBuf {
        self.storage_root
            .join(METADATA_DIR_NAME)
            .join(bucket)
            .join(relative_path)
    }

    /// Resolve one object reference against current on-disk state.
    ///
    /// Returns [`Resolution::Absent`] when the primary object file is not on
    /// disk; the sidecar is never consulted in that case. When the object
    /// exists, the sidecar's declared content type is reported verbatim, or
    /// the fallback when no usable declaration is found.
    ///
    /// Neither `bucket` nor `relative_path` is validated or sanitized here;
    /// both pass through to the filesystem unchanged.
    ///
    /// # Errors
    ///
    /// Any I/O failure other than not-found while probing the primary object
    /// is returned as [`ReaderError::Probe`]: absence must be exact, never
    /// inferred from an unreadable probe. Sidecar failures are not errors.
    pub async fn resolve(&self, bucket: &str, relative_path: &str) -> ReaderResult<Resolution> {
        let primary = self.primary_path(bucket, relative_path);
        match tokio::fs::metadata(&primary).await {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Resolution::Absent);
            }
            Err(err) => {
                return Err(ReaderError::Probe {
                    path: primary,
                    source: err,
                });
            }
        }

        let sidecar = self.sidecar_path(bucket, relative_path);
        let declared = sidecar::read_declared_content_type(&sidecar).await;
        Ok(Resolution::from_declared(declared))
    }
}
