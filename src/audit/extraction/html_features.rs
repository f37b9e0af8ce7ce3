use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Structural facts pulled out of one HTML document.
///
/// Everything the SEO scorer looks at is captured here so scoring never
/// needs the parsed tree (which is not `Send`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFeatures {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Counts for h1..h6, index 0 is h1
    pub heading_counts: [usize; 6],
    pub image_count: usize,
    pub images_with_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub canonical: Option<String>,
    pub og_title: bool,
    pub og_description: bool,
    pub og_image: bool,
    pub twitter_card: bool,
    pub twitter_title: bool,
    pub twitter_description: bool,
    pub viewport: bool,
}

impl PageFeatures {
    /// Parses `html` and extracts its features.
    ///
    /// `origin` is the page's `scheme://host[:port]`; links starting with it
    /// count as internal.
    pub fn extract(html: &str, origin: &str) -> Self {
        let document = Html::parse_document(html);

        let tags = meta_tag_selectors();
        let (image_count, images_with_alt) = count_images(&document);
        let (internal_links, external_links) = count_links(&document, origin);

        Self {
            title: extract_title(&document),
            meta_description: meta_content(&document, meta_description_selector()),
            heading_counts: count_headings(&document),
            image_count,
            images_with_alt,
            internal_links,
            external_links,
            canonical: extract_canonical(&document),
            og_title: has_meta(&document, &tags.og_title),
            og_description: has_meta(&document, &tags.og_description),
            og_image: has_meta(&document, &tags.og_image),
            twitter_card: has_meta(&document, &tags.twitter_card),
            twitter_title: has_meta(&document, &tags.twitter_title),
            twitter_description: has_meta(&document, &tags.twitter_description),
            viewport: has_meta(&document, &tags.viewport),
        }
    }

    pub fn h1_count(&self) -> usize {
        self.heading_counts[0]
    }

    pub fn h2_count(&self) -> usize {
        self.heading_counts[1]
    }

    pub fn images_without_alt(&self) -> usize {
        self.image_count - self.images_with_alt
    }
}

fn extract_title(document: &Html) -> Option<String> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn meta_description_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("meta[name=\"description\"]").unwrap())
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Open Graph, Twitter and viewport tags, parsed once
struct MetaTagSelectors {
    og_title: Selector,
    og_description: Selector,
    og_image: Selector,
    twitter_card: Selector,
    twitter_title: Selector,
    twitter_description: Selector,
    viewport: Selector,
}

fn meta_tag_selectors() -> &'static MetaTagSelectors {
    static SELECTORS: OnceLock<MetaTagSelectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let property =
            |name: &str| Selector::parse(&format!("meta[property=\"{}\"]", name)).unwrap();
        let named = |name: &str| Selector::parse(&format!("meta[name=\"{}\"]", name)).unwrap();
        MetaTagSelectors {
            og_title: property("og:title"),
            og_description: property("og:description"),
            og_image: property("og:image"),
            twitter_card: named("twitter:card"),
            twitter_title: named("twitter:title"),
            twitter_description: named("twitter:description"),
            viewport: named("viewport"),
        }
    })
}

/// True when the first element matching `selector` carries a non-empty `content`
fn has_meta(document: &Html, selector: &Selector) -> bool {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .is_some_and(|content| !content.is_empty())
}

fn extract_canonical(document: &Html) -> Option<String> {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("link[rel=\"canonical\"]").unwrap());
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

fn count_headings(document: &Html) -> [usize; 6] {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

    let mut counts = [0usize; 6];
    for element in document.select(selector) {
        let level = element
            .value()
            .name()
            .trim_start_matches('h')
            .parse::<usize>()
            .ok();
        if let Some(level @ 1..=6) = level {
            counts[level - 1] += 1;
        }
    }
    counts
}

fn count_images(document: &Html) -> (usize, usize) {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("img").unwrap());

    document
        .select(selector)
        .fold((0, 0), |(total, with_alt), image| {
            (total + 1, with_alt + usize::from(has_alt_text(&image)))
        })
}

fn has_alt_text(image: &ElementRef<'_>) -> bool {
    image.value().attr("alt").is_some_and(|alt| !alt.is_empty())
}

fn count_links(document: &Html, origin: &str) -> (usize, usize) {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    let selector = SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap());

    let mut internal = 0;
    let mut external = 0;
    for link in document.select(selector) {
        let href = link.value().attr("href").unwrap_or_default();
        if href.starts_with('/') || href.starts_with(origin) || href.starts_with('#') {
            internal += 1;
        } else if href.starts_with("http") {
            external += 1;
        }
    }
    (internal, external)
}
