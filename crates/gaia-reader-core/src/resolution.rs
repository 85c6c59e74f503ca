/// Fallback substituted whenever no usable declared content type exists.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Outcome of resolving one object reference against the disk.
///
/// A content type is carried exactly when the object exists; the two-variant
/// shape makes an `exists` flag with a dangling content type unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The primary object file is not on disk.
    Absent,
    /// The primary object file is on disk, with its effective content type.
    Present { content_type: String },
}

impl Resolution {
    /// A present object with the given effective content type.
    pub fn present(content_type: impl Into<String>) -> Self {
        Self::Present {
            content_type: content_type.into(),
        }
    }

    /// Assemble a present resolution from the sidecar's declared value.
    ///
    /// The declared value is used verbatim when present and non-empty;
    /// otherwise [`FALLBACK_CONTENT_TYPE`] is substituted.
    pub fn from_declared(declared: Option<String>) -> Self {
        let content_type = declared
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
        Self::Present { content_type }
    }

    /// Whether the primary object exists.
    pub fn exists(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// The effective content type, defined exactly when the object exists.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present { content_type } => Some(content_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_has_no_content_type() {
        let r = Resolution::Absent;
        assert!(!r.exists());
        assert_eq!(r.content_type(), None);
    }

    #[test]
    fn present_always_has_a_content_type() {
        let r = Resolution::present("text/plain");
        assert!(r.exists());
        assert_eq!(r.content_type(), Some("text/plain"));
    }

    #[test]
    fn declared_value_used_verbatim() {
        // Declared types are caller data; nonsense values pass through.
        let r = Resolution::from_declared(Some("application/potatoes".into()));
        assert_eq!(r.content_type(), Some("application/potatoes"));
    }

    #[test]
    fn missing_declared_value_falls_back() {
        let r = Resolution::from_declared(None);
        assert!(r.exists());
        assert_eq!(r.content_type(), Some(FALLBACK_CONTENT_TYPE));
    }

    #[test]
    fn empty_declared_value_falls_back() {
        let r = Resolution::from_declared(Some(String::new()));
        assert_eq!(r.content_type(), Some("application/octet-stream"));
    }
}
