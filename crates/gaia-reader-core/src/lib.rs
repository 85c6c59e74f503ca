//! Read-path resolution for the Gaia disk-backed storage hub.
//!
//! Given a bucket identifier and a relative path, the [`DiskReader`] answers
//! one question: does the object exist on local disk, and if so, what content
//! type should be reported for it? It composes two filesystem probes -- an
//! authoritative existence check on the primary object file and a best-effort
//! read of its JSON metadata sidecar -- into a single [`Resolution`].
//!
//! # Layout Contract
//!
//! The on-disk layout is shared with external writers and must match exactly:
//!
//! - Object bytes: `<root>/<bucket>/<relativePath>`
//! - Metadata sidecar: `<root>/.gaia-metadata/<bucket>/<relativePath>`,
//!   a JSON document containing at least `{"content-type": "<string>"}`
//!
//! # Design Rules
//!
//! 1. The primary probe is authoritative and exact: only a not-found result
//!    maps to [`Resolution::Absent`]; every other I/O failure is an error.
//! 2. The sidecar probe is best-effort: any failure reading or decoding it
//!    degrades to the fallback content type, never to an error.
//! 3. Declared content types are caller-controlled data and are reported
//!    verbatim, with no MIME-grammar validation.
//! 4. The reader is read-only. It never writes, deletes, or creates
//!    directories, and holds no locks against concurrent writers.
//! 5. Resolution is stateless: each call is independent and idempotent
//!    against unchanged disk state.

pub mod config;
pub mod error;
pub mod reader;
pub mod resolution;
pub mod sidecar;

// Re-export primary types at crate root for ergonomic imports.
pub use config::DiskSettings;
pub use error::{ReaderError, ReaderResult};
pub use reader::DiskReader;
pub use resolution::{Resolution, FALLBACK_CONTENT_TYPE};
pub use sidecar::{SidecarMetadata, METADATA_DIR_NAME};
