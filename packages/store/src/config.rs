use serde::{Deserialize, Serialize};

/// Page-level rendering parameters supplied by the configuration record.
///
/// The composition core treats this purely as rendering input; the banner,
/// footer and navigation entries feed the page chrome around the rendered
/// tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Maximum page width in page units.
    #[serde(default = "default_page_width")]
    pub max_page_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

fn default_page_width() -> f64 {
    1280.0
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_page_width: default_page_width(),
            banner: None,
            footer_text: None,
            nav_links: Vec::new(),
        }
    }
}
