//! The persistence seam.
//!
//! The crate never owns storage: decoded image metadata and per-image
//! attribution fields live in the host application's content store. The
//! [`MetadataStore`] trait is the injected collaborator interface, and
//! [`MemoryStore`] is a `HashMap`-backed implementation for tests and for
//! embedders without a store of their own.

use std::collections::HashMap;

/// Identifies one image (attachment) in the host's content store.
pub type ImageId = u64;

/// Attachment field: the extracted/edited license URL.
pub const LICENSE_URL: &str = "license_url";
/// Attachment field: the URL the work should be attributed to.
pub const ATTRIBUTION_URL: &str = "attribution_url";
/// Attachment field: the name the work should be attributed to.
pub const ATTRIBUTION_NAME: &str = "attribution_name";
/// Attachment field: the work this work is based on or derived from.
pub const SOURCE_WORK_URL: &str = "source_work_url";
/// Attachment field: where extra permissions beyond the license can be obtained.
pub const EXTRA_PERMISSIONS_URL: &str = "extra_permissions_url";

/// Key-value access to per-image metadata, implemented by the host.
///
/// Absence (no image, no mapping, no field) is always `None` — never an
/// error. All reads and writes here are the host's responsibility; the crate
/// performs no I/O of its own.
pub trait MetadataStore {
    /// Decoded EXIF/IPTC key-value data for one image, or `None` when the
    /// format carries no metadata (a normal outcome, not a failure).
    fn decoded_image_metadata(&self, id: ImageId) -> Option<HashMap<String, String>>;

    /// Read one attachment field.
    fn field(&self, id: ImageId, name: &str) -> Option<String>;

    /// Write one attachment field, but only if it is currently absent or
    /// empty. No-op otherwise.
    fn set_field_once(&mut self, id: ImageId, name: &str, value: &str);

    /// The content item's explicit title, if any.
    fn content_title(&self, id: ImageId) -> Option<String>;
}

/// The per-image attribution fields, as currently persisted.
///
/// Owned by the external store; this is a read snapshot. Empty stored values
/// load as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributionRecord {
    pub license_url: Option<String>,
    pub attribution_url: Option<String>,
    pub attribution_name: Option<String>,
    pub source_work_url: Option<String>,
    pub extra_permissions_url: Option<String>,
}

impl AttributionRecord {
    /// Load the record snapshot for one image.
    pub fn load(store: &dyn MetadataStore, id: ImageId) -> Self {
        let get = |name: &str| store.field(id, name).filter(|v| !v.is_empty());
        Self {
            license_url: get(LICENSE_URL),
            attribution_url: get(ATTRIBUTION_URL),
            attribution_name: get(ATTRIBUTION_NAME),
            source_work_url: get(SOURCE_WORK_URL),
            extra_permissions_url: get(EXTRA_PERMISSIONS_URL),
        }
    }
}

/// In-memory [`MetadataStore`] backed by `HashMap`s.
#[derive(Debug, Default)]
pub struct MemoryStore {
    metadata: HashMap<ImageId, HashMap<String, String>>,
    fields: HashMap<(ImageId, String), String>,
    titles: HashMap<ImageId, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach decoded EXIF/IPTC metadata to an image.
    pub fn insert_metadata(&mut self, id: ImageId, metadata: HashMap<String, String>) {
        self.metadata.insert(id, metadata);
    }

    /// Set the content title for an image.
    pub fn set_title(&mut self, id: ImageId, title: &str) {
        self.titles.insert(id, title.to_string());
    }

    /// Set a field unconditionally (explicit user edit).
    pub fn set_field(&mut self, id: ImageId, name: &str, value: &str) {
        self.fields.insert((id, name.to_string()), value.to_string());
    }
}

impl MetadataStore for MemoryStore {
    fn decoded_image_metadata(&self, id: ImageId) -> Option<HashMap<String, String>> {
        self.metadata.get(&id).cloned()
    }

    fn field(&self, id: ImageId, name: &str) -> Option<String> {
        self.fields.get(&(id, name.to_string())).cloned()
    }

    fn set_field_once(&mut self, id: ImageId, name: &str, value: &str) {
        let key = (id, name.to_string());
        if self.fields.get(&key).is_some_and(|v| !v.is_empty()) {
            log::debug!("field {name} already set for image {id}; leaving it");
            return;
        }
        self.fields.insert(key, value.to_string());
    }

    fn content_title(&self, id: ImageId) -> Option<String> {
        self.titles.get(&id).cloned()
    }
}
