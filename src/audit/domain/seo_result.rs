use super::issue::Issue;
use serde::{Deserialize, Serialize};

/// Presence and length of a text element such as `<title>` or the meta description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub exists: bool,
    pub content: Option<String>,
    pub length: usize,
    pub is_optimal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSummary {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub h5_count: usize,
    pub h6_count: usize,
    /// Exactly one H1 and at least one H2
    pub has_proper_hierarchy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub internal: usize,
    pub external: usize,
    /// Link reachability is not checked; always 0.
    pub broken: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalTag {
    pub exists: bool,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphTags {
    pub has_title: bool,
    pub has_description: bool,
    pub has_image: bool,
}

impl OpenGraphTags {
    pub fn is_complete(&self) -> bool {
        self.has_title && self.has_description && self.has_image
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCardTags {
    pub has_card: bool,
    pub has_title: bool,
    pub has_description: bool,
}

/// SEO findings for a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoResult {
    pub score: u8,
    pub title: TextElement,
    pub meta_description: TextElement,
    pub headings: HeadingSummary,
    pub images: ImageSummary,
    pub links: LinkSummary,
    pub canonical: CanonicalTag,
    pub open_graph: OpenGraphTags,
    pub twitter_card: TwitterCardTags,
    pub robots_txt: bool,
    pub sitemap: bool,
    pub viewport: bool,
    pub issues: Vec<Issue>,
}
