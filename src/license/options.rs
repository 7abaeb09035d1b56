use serde::Serialize;

/// One entry of the license-selection option list for edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseChoice {
    /// Short display name, e.g. "CC BY-SA 4.0".
    pub display_name: &'static str,
    /// License URL; empty for the "None" choice.
    pub url: &'static str,
}

// Short names so a select widget fits on one line next to a text input.
const CHOICES: &[LicenseChoice] = &[
    LicenseChoice {
        display_name: "CC BY 4.0",
        url: "https://creativecommons.org/licenses/by/4.0/",
    },
    LicenseChoice {
        display_name: "CC BY-NC 4.0",
        url: "https://creativecommons.org/licenses/by-nc/4.0/",
    },
    LicenseChoice {
        display_name: "CC BY-NC-ND 4.0",
        url: "https://creativecommons.org/licenses/by-nc-nd/4.0/",
    },
    LicenseChoice {
        display_name: "CC BY-NC-SA 4.0",
        url: "https://creativecommons.org/licenses/by-nc-sa/4.0/",
    },
    LicenseChoice {
        display_name: "CC BY-ND 4.0",
        url: "https://creativecommons.org/licenses/by-nd/4.0/",
    },
    LicenseChoice {
        display_name: "CC BY-SA 4.0",
        url: "https://creativecommons.org/licenses/by-sa/4.0/",
    },
    LicenseChoice {
        display_name: "CC0",
        url: "https://creativecommons.org/publicdomain/zero/1.0/",
    },
    LicenseChoice {
        display_name: "None",
        url: "",
    },
];

/// The ordered license options offered on user-facing edit forms: the six
/// CC 4.0 combinations, CC0 1.0, and "None".
pub fn choices() -> &'static [LicenseChoice] {
    CHOICES
}
