//! # cc-attribution
//!
//! Creative Commons license extraction for images — parse license URLs embedded
//! in decoded EXIF/IPTC metadata, canonicalize them into a license identity
//! (URL, display name, badge icon), and render attribution markup with
//! machine-readable RDFa.
//!
//! Reading binary EXIF bytes is out of scope: the library works on the decoded
//! string-keyed mapping that an upstream image reader provides.
//!
//! ## Quick Start
//!
//! The pure-function core can be used directly on metadata field values:
//!
//! ```rust
//! use cc_attribution::{extract, license};
//!
//! // An EXIF Copyright field following the "<text> <<url>>" convention
//! let copyright = "A. N. Other <https://creativecommons.org/licenses/by-sa/4.0/>";
//!
//! let url = extract::license_candidate(copyright).unwrap();
//! let identity = license::classify(&license::normalize_url(&url)).unwrap();
//!
//! assert_eq!(
//!     identity.name,
//!     "Creative Commons Attribution-ShareAlike 4.0 International License",
//! );
//! assert!(!identity.is_public_domain);
//! ```
//!
//! ## Full Flow
//!
//! For the persistence-backed flow, implement [`store::MetadataStore`] against
//! your content store and drive the pipeline:
//!
//! ```rust
//! use cc_attribution::config::Config;
//! use cc_attribution::pipeline;
//! use cc_attribution::store::MemoryStore;
//! use std::collections::HashMap;
//!
//! let mut store = MemoryStore::new();
//! store.insert_metadata(42, HashMap::from([
//!     ("copyright".to_string(),
//!      "Photo by R. M. <https://creativecommons.org/licenses/by/4.0/>".to_string()),
//!     ("ImageDescription".to_string(),
//!      "Sunrise <https://example.com/rm/sunrise/>".to_string()),
//! ]));
//!
//! // On upload: extract and persist license_url / attribution_url (write-once)
//! pipeline::on_image_ingested(&mut store, 42);
//!
//! // On render: produce the RDFa attribution block
//! let config = Config::default();
//! let markup = pipeline::render_attribution_markup(&store, &config, 42, None);
//! assert!(markup.contains("https://creativecommons.org/licenses/by/4.0/"));
//! ```
//!
//! ## Modules
//!
//! - [`extract`] — pull bracketed URLs and free text out of metadata field values
//! - [`license`] — classify CC / Public Domain URLs into a [`license::LicenseIdentity`]
//! - [`render`] — attribution markup (compact credit line, RDFa block, caption wrapper)
//! - [`pipeline`] — orchestration: extraction patches and store-backed entry points
//! - [`store`] — the collaborator seam for metadata persistence
//! - [`config`] — runtime configuration and JSON loading/saving

pub mod config;
pub mod extract;
pub mod license;
pub mod pipeline;
pub mod render;
pub mod store;
