//! Attribution markup rendering.
//!
//! Three compositional layers, all pure string builders:
//!
//! - [`simple_block`] — compact credit line (credit, linked title, badge)
//! - [`full_block`] — badge plus RDFa-annotated attribution block
//! - [`caption_block`] — caption wrapper around a full block
//!
//! Rendering never fails: with no recognized license identity the full block
//! degrades to a plain `(<title> by <credit>)` sentence, or nothing at all.

use crate::license::LicenseIdentity;

/// Escape text for HTML element content.
fn esc_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape text for a double-quoted HTML attribute value.
fn esc_attr(s: &str) -> String {
    esc_html(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Render the compact credit line used in attribution boxes.
///
/// Produces a credit div, the title linked to the attribution URL, and the
/// license badge linked to the license URL with the canonical name as both
/// tooltip and alt text. `lazy` selects the badge image loading attribute.
///
/// Returns an empty string when there is no identity or the identity has no
/// badge icon — no badge, no block.
pub fn simple_block(
    identity: Option<&LicenseIdentity>,
    title: &str,
    credit: &str,
    attribution_url: &str,
    lazy: bool,
) -> String {
    let Some(identity) = identity else {
        return String::new();
    };
    let Some(icon) = identity.icon_url.as_deref() else {
        return String::new();
    };

    let loading = if lazy { "lazy" } else { "eager" };
    format!(
        "<div>{credit}</div>\
         <a target=\"_blank\" href=\"{attr_url}\">{title}</a>\
         <a class=\"cc-attribution-box-license\" target=\"_blank\" href=\"{license_url}\" \
         title=\"{name}\"><img src=\"{icon}\" alt=\"{name}\" loading=\"{loading}\"></a>",
        credit = esc_html(credit),
        attr_url = esc_attr(attribution_url),
        title = esc_html(title),
        license_url = esc_attr(&identity.url),
        name = esc_attr(&identity.name),
        icon = esc_attr(icon),
    )
}

/// Render the badge plus the RDFa-annotated attribution block.
///
/// The RDFa expresses the work URL (`about`), license URL and name
/// (`rel="license"`), title (`dct:title`), attribution name and URL
/// (`cc:attributionName` / `cc:attributionURL`), source work
/// (`dct:source`), and extra permissions (`cc:morePermissions`).
///
/// `is_single_view` marks rendering on the work's own page: the title stays
/// plain text there, and is linked to the attribution URL everywhere else.
///
/// Without a license identity the block falls back to `(<title> by <credit>)`,
/// then `(<title>)`, then nothing.
pub fn full_block(
    identity: Option<&LicenseIdentity>,
    title: &str,
    credit: &str,
    attribution_url: &str,
    source_work_url: &str,
    extra_permissions_url: &str,
    is_single_view: bool,
) -> String {
    let Some(identity) = identity else {
        return fallback_sentence(title, credit);
    };

    let mut block = String::new();

    if let Some(icon) = identity.icon_url.as_deref() {
        block.push_str(&format!(
            "<a rel=\"license\" href=\"{url}\"><img class=\"cc-license-badge\" \
             src=\"{icon}\" alt=\"{name}\"></a>",
            url = esc_attr(&identity.url),
            icon = esc_attr(icon),
            name = esc_attr(&identity.name),
        ));
    }

    let about = if attribution_url.is_empty() {
        String::new()
    } else {
        format!(" about=\"{}\"", esc_attr(attribution_url))
    };
    block.push_str(&format!(
        "<div class=\"cc-attribution-block\" \
         xmlns:cc=\"http://creativecommons.org/ns#\" \
         xmlns:dct=\"http://purl.org/dc/terms/\"{about}>"
    ));

    if is_single_view || attribution_url.is_empty() {
        block.push_str(&format!(
            "<span property=\"dct:title\">{}</span>",
            esc_html(title)
        ));
    } else {
        block.push_str(&format!(
            "<a href=\"{}\" property=\"dct:title\" rel=\"cc:attributionURL\">{}</a>",
            esc_attr(attribution_url),
            esc_html(title),
        ));
    }

    if !credit.is_empty() {
        block.push_str(&format!(
            " by <span property=\"cc:attributionName\">{}</span>",
            esc_html(credit)
        ));
    }

    block.push_str(&format!(
        " is licensed under a <a rel=\"license\" href=\"{}\">{}</a>.",
        esc_attr(&identity.url),
        esc_html(&identity.name),
    ));

    if !source_work_url.is_empty() {
        block.push_str(&format!(
            " Based on a work at <a href=\"{url}\" rel=\"dct:source\">{text}</a>.",
            url = esc_attr(source_work_url),
            text = esc_html(source_work_url),
        ));
    }

    if !extra_permissions_url.is_empty() {
        block.push_str(&format!(
            " Permissions beyond the scope of this license may be available at \
             <a href=\"{url}\" rel=\"cc:morePermissions\">{text}</a>.",
            url = esc_attr(extra_permissions_url),
            text = esc_html(extra_permissions_url),
        ));
    }

    block.push_str("</div>");
    block
}

/// The no-license fallback: a plain credit sentence, or nothing.
fn fallback_sentence(title: &str, credit: &str) -> String {
    if title.is_empty() {
        String::new()
    } else if credit.is_empty() {
        format!("<p>({})</p>", esc_html(title))
    } else {
        format!("<p>({} by {})</p>", esc_html(title), esc_html(credit))
    }
}

/// Wrap a caption and a rendered full block in the caption container.
///
/// Purely compositional: both arguments are treated as already-rendered
/// markup and are not escaped here.
pub fn caption_block(caption: &str, full_block_markup: &str) -> String {
    format!(
        "<div class=\"cc-license-caption-wrapper cc-license-block\">\
         <div class=\"cc-caption-text\">{caption}</div><br />{full_block_markup}</div>"
    )
}
