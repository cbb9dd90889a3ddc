//! Profile picture resolution.
//!
//! A stored picture reference is one of several historical formats. It is
//! classified once into [`ProfilePictureRef`] and resolved from there; no other
//! module inspects the raw string.

use tracing::debug;

const DATA_URI_PREFIX: &str = "data:";
const ABSOLUTE_URL_PREFIX: &str = "http";
/// Ids of images that only exist in the editor's browser-local storage.
const LOCAL_STORAGE_PREFIX: &str = "profile_";
const UPLOADS_PREFIX: &str = "/uploads/";
const LEGACY_PICTURE_DIR: &str = "/uploads/profile-pictures/";

/// Classified profile picture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePictureRef<'a> {
    Missing,
    DataUri(&'a str),
    Absolute(&'a str),
    /// Unreachable from the server; renders as no picture.
    LocalStorage(&'a str),
    /// Site-relative path under `/uploads/`.
    UploadsPath(&'a str),
    /// Bare filename from the legacy upload directory.
    BareFilename(&'a str),
}

impl<'a> ProfilePictureRef<'a> {
    pub fn classify(raw: Option<&'a str>) -> Self {
        let raw = match raw.map(str::trim) {
            None | Some("") => return ProfilePictureRef::Missing,
            Some(s) => s,
        };

        if raw.starts_with(DATA_URI_PREFIX) {
            ProfilePictureRef::DataUri(raw)
        } else if raw.starts_with(ABSOLUTE_URL_PREFIX) {
            ProfilePictureRef::Absolute(raw)
        } else if raw.starts_with(LOCAL_STORAGE_PREFIX) {
            ProfilePictureRef::LocalStorage(raw)
        } else if raw.starts_with(UPLOADS_PREFIX) {
            ProfilePictureRef::UploadsPath(raw)
        } else {
            ProfilePictureRef::BareFilename(raw)
        }
    }

    /// Returns a reference usable directly in an `<img src>`, or `None`.
    /// `origin` is scheme + host; only relative variants consult it.
    pub fn resolve(&self, origin: &str) -> Option<String> {
        let origin = origin.trim_end_matches('/');
        match self {
            ProfilePictureRef::Missing | ProfilePictureRef::LocalStorage(_) => None,
            ProfilePictureRef::DataUri(s) | ProfilePictureRef::Absolute(s) => Some(s.to_string()),
            ProfilePictureRef::UploadsPath(path) => Some(format!("{origin}{path}")),
            ProfilePictureRef::BareFilename(name) => Some(format!(
                "{origin}{LEGACY_PICTURE_DIR}{}",
                name.trim_start_matches('/')
            )),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ProfilePictureRef::Missing => "missing",
            ProfilePictureRef::DataUri(_) => "data_uri",
            ProfilePictureRef::Absolute(_) => "absolute",
            ProfilePictureRef::LocalStorage(_) => "local_storage",
            ProfilePictureRef::UploadsPath(_) => "uploads_path",
            ProfilePictureRef::BareFilename(_) => "bare_filename",
        }
    }
}

/// Classifies and resolves a stored picture reference in one step.
pub fn resolve_profile_picture(raw: Option<&str>, origin: &str) -> Option<String> {
    let picture = ProfilePictureRef::classify(raw);
    if let ProfilePictureRef::LocalStorage(id) = &picture {
        debug!("Profile picture {id} lives in browser storage; rendering without it");
    } else {
        debug!("Profile picture classified as {}", picture.kind());
    }
    picture.resolve(origin)
}
