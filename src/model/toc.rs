use serde::{Deserialize, Serialize};

/// A navigation document for the documentation site generator.
///
/// The course-level document carries an `href` back to the landing page and
/// a `navigation` block; section- and lesson-level documents consist of a
/// title and items only, so both fields stay out of their serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocDocument {
    /// Display title of the document.
    pub title: String,
    /// Page opened when the title itself is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Site-header navigation attached to the course-level document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    /// All entries making up the document, in display order.
    pub items: Vec<TocItem>,
}

/// Site-header navigation block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    pub logo: Logo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Logo {
    /// Target of the logo link in the site header.
    pub url: String,
    /// Text displayed next to the logo.
    pub text: String,
}

/// A single entry in a navigation document: either a direct link to a
/// content page, or an include pulling in another TOC document by path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TocItem {
    Link(Link),
    Include(Include),
}

impl TocItem {
    /// A direct link entry.
    pub fn link(name: impl Into<String>, href: impl Into<String>) -> Self {
        TocItem::Link(Link {
            name: name.into(),
            href: href.into(),
        })
    }

    /// An include entry referencing the TOC document at `path`.
    pub fn include(name: impl Into<String>, path: impl Into<String>) -> Self {
        TocItem::Include(Include {
            name: name.into(),
            include: IncludeRef {
                path: path.into(),
                mode: IncludeMode::Link,
            },
            expanded: None,
        })
    }

    pub fn maybe_link(&self) -> Option<&Link> {
        match self {
            TocItem::Link(ref link) => Some(link),
            _ => None,
        }
    }

    pub fn maybe_link_mut(&mut self) -> Option<&mut Link> {
        match self {
            TocItem::Link(ref mut link) => Some(link),
            _ => None,
        }
    }

    pub fn maybe_include(&self) -> Option<&Include> {
        match self {
            TocItem::Include(ref include) => Some(include),
            _ => None,
        }
    }

    pub fn maybe_include_mut(&mut self) -> Option<&mut Include> {
        match self {
            TocItem::Include(ref mut include) => Some(include),
            _ => None,
        }
    }
}

impl From<Link> for TocItem {
    fn from(link: Link) -> Self {
        TocItem::Link(link)
    }
}

impl From<Include> for TocItem {
    fn from(include: Include) -> Self {
        TocItem::Include(include)
    }
}

/// A direct link to a content page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Display name of the entry.
    pub name: String,
    /// Path of the linked page, relative to the document being built.
    pub href: String,
}

/// A reference to another TOC document, resolved by the site generator at
/// render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Include {
    /// Display name of the entry.
    pub name: String,
    /// The referenced TOC document.
    pub include: IncludeRef,
    /// Marks the entry as initially expanded in the rendered navigation.
    /// Unmarked entries start collapsed, so the key is only serialized when
    /// set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncludeRef {
    /// Path of the included document, relative to the document being built.
    pub path: String,
    pub mode: IncludeMode,
}

/// How an included document is stitched into its parent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncludeMode {
    /// The include stays a standalone document linked from the parent.
    Link,
}

/// The landing page document of the generated site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexPage {
    /// Display title of the landing page.
    pub title: String,
    /// Description shown below the title.
    pub description: String,
    /// One tile per section, in display order.
    pub links: Vec<IndexLink>,
}

/// A tile on the landing page pointing at a section introduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexLink {
    pub title: String,
    pub description: String,
    pub href: String,
}
