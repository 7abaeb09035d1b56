use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Base path under which the per-license badge icons are served.
pub const ICON_BASE: &str = "/assets/attribution-box/";

// Matches the `/licenses/<id>/` or `/publicdomain/<id>/` path segment that
// every recognized URL carries.
static LICENSE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(licenses|publicdomain)/([^/]+)/").expect("license path regex should compile")
});

/// A canonical license identity derived from a recognized URL.
///
/// Built only by [`classify`], and only from a URL matching the CC
/// `/licenses/…/` or `/publicdomain/…/` path convention — never partially
/// populated. Derivation is a pure function of the URL string: same URL,
/// same identity, always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseIdentity {
    /// The (caller-normalized) license URL.
    pub url: String,
    /// Canonical English name, e.g. "Creative Commons Attribution 4.0 International License".
    pub name: String,
    /// Badge icon for the license, under [`ICON_BASE`].
    pub icon_url: Option<String>,
    /// Whether the URL is in the `publicdomain` family.
    pub is_public_domain: bool,
}

/// Whether the URL carries a `/licenses/<id>/` or `/publicdomain/<id>/` segment.
pub fn is_recognized(url: &str) -> bool {
    LICENSE_PATH.is_match(url)
}

/// The badge icon URL for a license URL, or `None` if unrecognized.
///
/// The `publicdomain` family and the `zero` id both get the CC0 badge; every
/// other id gets its own icon (`by.svg`, `by-sa.svg`, `by-nc-nd.svg`, …).
pub fn icon_url(license_url: &str) -> Option<String> {
    let caps = LICENSE_PATH.captures(license_url)?;
    let (family, id) = (&caps[1], &caps[2]);
    if id == "zero" || family == "publicdomain" {
        Some(format!("{ICON_BASE}cc0.svg"))
    } else {
        Some(format!("{ICON_BASE}{id}.svg"))
    }
}

/// The canonical English name for the license with the given URL.
///
/// Substring matching, not a path parse. `-nd` is checked before `-sa` and
/// they are mutually exclusive; a URL containing both yields only
/// `-NoDerivatives`. The version suffix is the first match among
/// `/2.0/`, `/2.5/`, `/3.0/`, `/4.0/`; no match means no suffix.
pub fn canonical_name(license_url: &str) -> String {
    if license_url.contains("/publicdomain/") {
        // The zero dedication carries its version in the name.
        if license_url.contains("/zero/1.0") {
            return "CC0 1.0 Universal".to_string();
        }
        return "Public Domain".to_string();
    }

    let mut name = String::from("Creative Commons Attribution");
    if license_url.contains("-nc") {
        name.push_str("-NonCommercial");
    }
    if license_url.contains("-nd") {
        name.push_str("-NoDerivatives");
    } else if license_url.contains("-sa") {
        name.push_str("-ShareAlike");
    }

    if license_url.contains("/2.0/") {
        name.push_str(" 2.0 Generic");
    } else if license_url.contains("/2.5/") {
        name.push_str(" 2.5 Generic");
    } else if license_url.contains("/3.0/") {
        name.push_str(" 3.0 Unported");
    } else if license_url.contains("/4.0/") {
        name.push_str(" 4.0 International");
    }
    name.push_str(" License");
    name
}

/// Whether the URL is the CC0 public domain dedication.
pub fn is_public_domain_dedication(license_url: &str) -> bool {
    license_url.contains("//creativecommons.org/publicdomain/zero/1.0/")
}

/// Caller-side normalization applied before classification: lower-case the
/// URL and ensure a trailing `/` when it contains `creativecommons`.
///
/// The classification functions assume this has already happened; they do
/// not normalize themselves.
pub fn normalize_url(url: &str) -> String {
    let mut url = url.trim().to_lowercase();
    if url.contains("creativecommons") && !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Classify a normalized URL into a [`LicenseIdentity`].
///
/// All-or-nothing: `None` unless the URL carries a recognized
/// `/licenses/<id>/` or `/publicdomain/<id>/` segment.
pub fn classify(normalized_url: &str) -> Option<LicenseIdentity> {
    if !is_recognized(normalized_url) {
        return None;
    }
    Some(LicenseIdentity {
        url: normalized_url.to_string(),
        name: canonical_name(normalized_url),
        icon_url: icon_url(normalized_url),
        is_public_domain: normalized_url.contains("/publicdomain/"),
    })
}
