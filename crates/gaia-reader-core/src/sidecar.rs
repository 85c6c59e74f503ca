//! Metadata sidecar probing.
//!
//! Each object may carry a JSON sidecar under the reserved
//! [`METADATA_DIR_NAME`] tree, written out-of-band by external writers. Its
//! lifecycle is independent of the primary object: the file, or any ancestor
//! directory of it, may be missing while the object itself exists.

use std::path::Path;

use serde::Deserialize;

/// Reserved top-level directory mirroring the object tree.
pub const METADATA_DIR_NAME: &str = ".gaia-metadata";

/// The sidecar document.
///
/// Only `content-type` is meaningful to the reader; writers may attach
/// additional fields, which are ignored. A missing or non-string
/// `content-type` is treated the same as a missing sidecar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SidecarMetadata {
    #[serde(rename = "content-type")]
    pub content_type: Option<String>,
}

/// Read and decode the sidecar at `path`, returning the declared content type.
///
/// The sidecar is best-effort: a missing file, a missing ancestor directory,
/// an unreadable file, malformed JSON, or an unusable `content-type` field
/// all collapse to `None`. Only the primary probe is authoritative.
pub(crate) async fn read_declared_content_type(path: &Path) -> Option<String> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "sidecar unreadable, using fallback");
            return None;
        }
    };
    match serde_json::from_slice::<SidecarMetadata>(&bytes) {
        Ok(metadata) => metadata.content_type,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "sidecar malformed, using fallback");
            None
        }
    }
}
