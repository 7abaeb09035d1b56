//! Orchestration: extraction patches and the store-facing entry points.
//!
//! [`extract_and_apply`] is the pure heart — decoded metadata in, proposed
//! write set out. [`on_image_ingested`] and the render entry points wire it
//! to a [`MetadataStore`]; they are the only code with side effects, and the
//! writes are guarded by the store's own write-once semantics rather than a
//! lock (concurrent first-writes compute the same value from the same input).

use serde::Serialize;
use std::collections::HashMap;

use crate::config::Config;
use crate::extract;
use crate::license;
use crate::render;
use crate::store::{self, AttributionRecord, ImageId, MetadataStore};

/// Decoded metadata key holding the EXIF/IPTC Copyright value.
pub const COPYRIGHT_KEY: &str = "copyright";
/// Decoded metadata key holding the EXIF ImageDescription value.
pub const IMAGE_DESCRIPTION_KEY: &str = "ImageDescription";
/// Decoded metadata key holding the IPTC credit value.
pub const CREDIT_KEY: &str = "credit";
/// Decoded metadata key holding the embedded title value.
pub const TITLE_KEY: &str = "title";

/// The write set proposed by one extraction pass.
///
/// Fields are present only when extraction produced a value *and* the
/// corresponding persisted field was empty. An all-`None` patch is the
/// normal outcome for images without usable metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordPatch {
    pub license_url: Option<String>,
    pub attribution_url: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.license_url.is_none() && self.attribution_url.is_none()
    }
}

/// Compute the extraction patch for one image.
///
/// `license_url` comes from the Copyright field via
/// [`extract::license_candidate`]; `attribution_url` from the
/// ImageDescription field via [`extract::url`]. Each enters the patch only
/// if the existing record's field is empty — write-once. An absent metadata
/// mapping (unsupported format upstream) yields an empty patch, never an
/// error. One-shot and deterministic; there is nothing to retry.
pub fn extract_and_apply(
    metadata: Option<&HashMap<String, String>>,
    existing: &AttributionRecord,
) -> RecordPatch {
    let Some(metadata) = metadata else {
        log::debug!("no decoded metadata; nothing to extract");
        return RecordPatch::default();
    };

    let mut patch = RecordPatch::default();

    if existing.license_url.is_none() {
        if let Some(copyright) = metadata.get(COPYRIGHT_KEY) {
            patch.license_url = extract::license_candidate(copyright);
        }
    }

    if existing.attribution_url.is_none() {
        if let Some(description) = metadata.get(IMAGE_DESCRIPTION_KEY) {
            patch.attribution_url = extract::url(description);
        }
    }

    patch
}

/// Ingestion hook: extract license metadata for a freshly uploaded image and
/// persist it, once.
pub fn on_image_ingested(store: &mut dyn MetadataStore, id: ImageId) {
    let metadata = store.decoded_image_metadata(id);
    let existing = AttributionRecord::load(&*store, id);
    let patch = extract_and_apply(metadata.as_ref(), &existing);

    if patch.is_empty() {
        log::debug!("image {id}: no license metadata extracted");
        return;
    }

    if let Some(url) = &patch.license_url {
        store.set_field_once(id, store::LICENSE_URL, url);
        log::info!("image {id}: extracted license_url {url}");
    }
    if let Some(url) = &patch.attribution_url {
        store.set_field_once(id, store::ATTRIBUTION_URL, url);
        log::info!("image {id}: extracted attribution_url {url}");
    }
}

/// Resolve title and credit for one image.
///
/// Title precedence: explicit content title, then the embedded metadata
/// title, then the fallback. Credit precedence: the persisted attribution
/// name, then the embedded metadata credit.
fn resolve_title_and_credit(
    store: &dyn MetadataStore,
    record: &AttributionRecord,
    id: ImageId,
    fallback_title: &str,
) -> (String, String) {
    let metadata = store.decoded_image_metadata(id);
    let meta_get = |key: &str| {
        metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .filter(|v| !v.is_empty())
            .cloned()
    };

    let title = store
        .content_title(id)
        .filter(|t| !t.is_empty())
        .or_else(|| meta_get(TITLE_KEY))
        .unwrap_or_else(|| fallback_title.to_string());

    let credit = record
        .attribution_name
        .clone()
        .or_else(|| meta_get(CREDIT_KEY))
        .unwrap_or_default();

    (title, credit)
}

/// Render the full attribution block (badge + RDFa) for one image.
///
/// `fallback_title` overrides the configured default title used when the
/// image has neither a content title nor an embedded one. Falls back to a
/// plain credit sentence — or nothing — when no license is recognized.
pub fn render_attribution_markup(
    store: &dyn MetadataStore,
    config: &Config,
    id: ImageId,
    fallback_title: Option<&str>,
) -> String {
    let record = AttributionRecord::load(store, id);
    let fallback = fallback_title.unwrap_or(&config.fallback_title);
    let (title, credit) = resolve_title_and_credit(store, &record, id, fallback);

    let normalized = record
        .license_url
        .as_deref()
        .map(license::normalize_url)
        .unwrap_or_default();
    let identity = license::classify(&normalized);

    render::full_block(
        identity.as_ref(),
        &title,
        &credit,
        record.attribution_url.as_deref().unwrap_or(""),
        record.source_work_url.as_deref().unwrap_or(""),
        record.extra_permissions_url.as_deref().unwrap_or(""),
        true,
    )
}

/// Render the compact attribution-box line for one image.
///
/// Empty when no license is recognized — the box is only shown for licensed
/// images.
pub fn simple_attribution_markup(
    store: &dyn MetadataStore,
    config: &Config,
    id: ImageId,
) -> String {
    let record = AttributionRecord::load(store, id);
    let (title, credit) = resolve_title_and_credit(store, &record, id, &config.fallback_title);

    let normalized = record
        .license_url
        .as_deref()
        .map(license::normalize_url)
        .unwrap_or_default();
    let identity = license::classify(&normalized);

    render::simple_block(
        identity.as_ref(),
        &title,
        &credit,
        record.attribution_url.as_deref().unwrap_or(""),
        config.lazy_load_badges,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn metadata_with(copyright: &str, description: &str) -> HashMap<String, String> {
        HashMap::from([
            (COPYRIGHT_KEY.to_string(), copyright.to_string()),
            (IMAGE_DESCRIPTION_KEY.to_string(), description.to_string()),
        ])
    }

    // ── extract_and_apply ─────────────────────────────────────────────

    #[test]
    fn absent_metadata_yields_empty_patch() {
        let patch = extract_and_apply(None, &AttributionRecord::default());
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_from_copyright_and_description() {
        let metadata = metadata_with(
            "CC BY <https://creativecommons.org/licenses/by/4.0/>",
            "Sunrise <https://example.com/rm/sunrise/>",
        );
        let patch = extract_and_apply(Some(&metadata), &AttributionRecord::default());
        assert_eq!(
            patch.license_url.as_deref(),
            Some("https://creativecommons.org/licenses/by/4.0/")
        );
        assert_eq!(
            patch.attribution_url.as_deref(),
            Some("https://example.com/rm/sunrise/")
        );
    }

    #[test]
    fn patch_never_overwrites_existing_fields() {
        let metadata = metadata_with(
            "CC BY <https://creativecommons.org/licenses/by/4.0/>",
            "Sunrise <https://example.com/rm/sunrise/>",
        );
        let existing = AttributionRecord {
            license_url: Some("https://creativecommons.org/licenses/by-sa/4.0/".to_string()),
            attribution_url: Some("https://example.com/original/".to_string()),
            ..Default::default()
        };
        let patch = extract_and_apply(Some(&metadata), &existing);
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_degrades_field_by_field() {
        // Malformed copyright, usable description: only attribution_url lands.
        let metadata = metadata_with(
            "all rights reserved",
            "Sunrise <https://example.com/rm/sunrise/>",
        );
        let patch = extract_and_apply(Some(&metadata), &AttributionRecord::default());
        assert_eq!(patch.license_url, None);
        assert_eq!(
            patch.attribution_url.as_deref(),
            Some("https://example.com/rm/sunrise/")
        );
    }

    // ── on_image_ingested ─────────────────────────────────────────────

    #[test]
    fn ingestion_persists_extracted_fields_once() {
        let mut store = MemoryStore::new();
        store.insert_metadata(
            1,
            metadata_with(
                "<https://creativecommons.org/licenses/by-nc/4.0/>",
                "Sunrise <https://example.com/rm/sunrise/>",
            ),
        );

        on_image_ingested(&mut store, 1);
        assert_eq!(
            store.field(1, store::LICENSE_URL).as_deref(),
            Some("https://creativecommons.org/licenses/by-nc/4.0/")
        );

        // A second ingestion with different metadata changes nothing.
        store.insert_metadata(
            1,
            metadata_with("<https://creativecommons.org/licenses/by/4.0/>", ""),
        );
        on_image_ingested(&mut store, 1);
        assert_eq!(
            store.field(1, store::LICENSE_URL).as_deref(),
            Some("https://creativecommons.org/licenses/by-nc/4.0/")
        );
    }

    #[test]
    fn ingestion_without_metadata_is_a_no_op() {
        let mut store = MemoryStore::new();
        on_image_ingested(&mut store, 5);
        assert!(store.field(5, store::LICENSE_URL).is_none());
        assert!(store.field(5, store::ATTRIBUTION_URL).is_none());
    }

    // ── render_attribution_markup ─────────────────────────────────────

    #[test]
    fn render_uses_stored_license_and_title_precedence() {
        let mut store = MemoryStore::new();
        // Stored URL is mixed case and missing its trailing slash; the
        // renderer normalizes before classifying.
        store.set_field(3, store::LICENSE_URL, "https://creativecommons.org/licenses/BY-SA/4.0");
        store.set_field(3, store::ATTRIBUTION_NAME, "A. N. Other");
        store.set_title(3, "Explicit Title");
        store.insert_metadata(
            3,
            HashMap::from([(TITLE_KEY.to_string(), "Embedded Title".to_string())]),
        );

        let markup = render_attribution_markup(&store, &Config::default(), 3, None);
        assert!(markup.contains("Explicit Title"));
        assert!(!markup.contains("Embedded Title"));
        assert!(markup.contains("https://creativecommons.org/licenses/by-sa/4.0/"));
        assert!(markup.contains("A. N. Other"));
    }

    #[test]
    fn render_falls_back_to_embedded_title_and_credit() {
        let mut store = MemoryStore::new();
        store.set_field(4, store::LICENSE_URL, "https://creativecommons.org/licenses/by/4.0/");
        store.insert_metadata(
            4,
            HashMap::from([
                (TITLE_KEY.to_string(), "Embedded Title".to_string()),
                (CREDIT_KEY.to_string(), "Embedded Credit".to_string()),
            ]),
        );

        let markup = render_attribution_markup(&store, &Config::default(), 4, None);
        assert!(markup.contains("Embedded Title"));
        assert!(markup.contains("Embedded Credit"));
    }

    #[test]
    fn render_without_license_is_plain_sentence() {
        let mut store = MemoryStore::new();
        store.set_title(6, "Sunrise");
        store.set_field(6, store::ATTRIBUTION_NAME, "A. N. Other");

        let markup = render_attribution_markup(&store, &Config::default(), 6, None);
        assert_eq!(markup, "<p>(Sunrise by A. N. Other)</p>");
    }

    #[test]
    fn render_without_anything_uses_fallback_title() {
        let store = MemoryStore::new();
        let markup = render_attribution_markup(&store, &Config::default(), 8, Some("This photo"));
        assert_eq!(markup, "<p>(This photo)</p>");
    }

    #[test]
    fn simple_markup_empty_without_license() {
        let mut store = MemoryStore::new();
        store.set_title(9, "Sunrise");
        let markup = simple_attribution_markup(&store, &Config::default(), 9);
        assert_eq!(markup, "");
    }

    #[test]
    fn simple_markup_with_license() {
        let mut store = MemoryStore::new();
        store.set_title(10, "Sunrise");
        store.set_field(10, store::LICENSE_URL, "https://creativecommons.org/licenses/by-nd/4.0/");
        store.set_field(10, store::ATTRIBUTION_URL, "https://example.com/rm/");

        let markup = simple_attribution_markup(&store, &Config::default(), 10);
        assert!(markup.contains("by-nd.svg"));
        assert!(markup.contains("href=\"https://example.com/rm/\">Sunrise</a>"));
    }
}
