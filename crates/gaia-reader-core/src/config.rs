use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Disk-backend settings consumed by [`DiskReader::open`].
///
/// [`DiskReader::open`]: crate::reader::DiskReader::open
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskSettings {
    /// Absolute directory all object and metadata paths resolve under.
    ///
    /// Must already exist and be readable; the reader never creates it.
    /// Configured once at startup and immutable for the reader's lifetime.
    pub storage_root_directory: PathBuf,
}

impl DiskSettings {
    /// Settings rooted at the given directory.
    pub fn new(storage_root_directory: impl Into<PathBuf>) -> Self {
        Self {
            storage_root_directory: storage_root_directory.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_takes_any_path_like() {
        let a = DiskSettings::new("/var/gaia");
        let b = DiskSettings::new(PathBuf::from("/var/gaia"));
        assert_eq!(a, b);
        assert_eq!(a.storage_root_directory, PathBuf::from("/var/gaia"));
    }

    #[test]
    fn deserializes_from_toml() {
        let settings: DiskSettings =
            toml::from_str("storage_root_directory = \"/var/gaia\"").unwrap();
        assert_eq!(settings.storage_root_directory, PathBuf::from("/var/gaia"));
    }

    #[test]
    fn serde_roundtrip() {
        let settings = DiskSettings::new("/srv/hub");
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: DiskSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }
}
