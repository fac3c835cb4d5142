use crate::Node;
use serde::{Deserialize, Serialize};

/// An ordered sequence of top-level nodes plus a name and a URL slug.
///
/// Owned entirely by the editing session until committed to the external
/// store; the store is the sole durable owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "url", default)]
    pub slug: String,
    #[serde(rename = "content", default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            slug,
            nodes: Vec::new(),
        }
    }

    /// Rename the page and re-derive its slug.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug = slugify(&self.name);
    }
}

/// URL slug for a page name: lowercased, Latin accents folded to ASCII,
/// whitespace runs joined with `-`, anything outside `[a-z0-9-]` dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars().map(fold_accent) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if c.is_whitespace() || c == '-' {
            if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        // Everything else is dropped.
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fold common Latin accented characters to their ASCII base letter.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}
