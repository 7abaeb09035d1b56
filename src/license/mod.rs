//! Creative Commons license classification.
//!
//! This module turns a license URL into a canonical identity:
//!
//! - [`classify`] — all-or-nothing assembly of a [`LicenseIdentity`] from a
//!   normalized URL
//! - [`canonical_name`] — the canonical English license name
//! - [`icon_url`] — the badge icon for the license
//! - [`choices`] — the ordered option list for user-facing edit forms
//!
//! Classification is a deliberate substring heuristic rather than a strict
//! path grammar; the matching order (and its false-positive surface) is part
//! of the contract. Callers normalize with [`normalize_url`] first.

mod classify;
mod options;

pub use classify::{
    LicenseIdentity, canonical_name, classify, icon_url, is_public_domain_dedication,
    is_recognized, normalize_url, ICON_BASE,
};
pub use options::{LicenseChoice, choices};
