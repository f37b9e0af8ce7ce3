use super::resource_prober::{ResourceProber, WellKnownResources};
use crate::audit::domain::{
    origin_of, CanonicalTag, HeadingSummary, ImageSummary, Issue, LinkSummary, OpenGraphTags,
    ScoreCard, SeoResult, TextElement, TwitterCardTags,
};
use crate::audit::extraction::PageFeatures;
use crate::ports::outbound::WebClient;
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::ops::RangeInclusive;
use std::sync::Arc;
use url::Url;

const OPTIMAL_TITLE_CHARS: RangeInclusive<usize> = 30..=60;
const OPTIMAL_DESCRIPTION_CHARS: RangeInclusive<usize> = 120..=160;
const MISSING_ALT_POINTS_EACH: u32 = 2;
const MISSING_ALT_POINTS_CAP: u32 = 10;

/// SeoAnalyzer fetches the page and its well-known siblings, then scores
/// the markup with [`SeoScorer`].
///
/// This is the only auditor allowed to fail: if the page itself cannot be
/// fetched there is nothing to audit.
pub struct SeoAnalyzer<W: WebClient> {
    client: Arc<W>,
    prober: ResourceProber<W>,
}

impl<W: WebClient> SeoAnalyzer<W> {
    pub fn new(client: Arc<W>) -> Self {
        let prober = ResourceProber::new(Arc::clone(&client));
        Self { client, prober }
    }

    pub async fn analyze(&self, url: &Url) -> Result<SeoResult> {
        let response = self
            .client
            .get(url.as_str())
            .await
            .map_err(|e| AuditError::PageFetch {
                url: url.to_string(),
                details: format!("{:#}", e),
            })?;

        if !response.is_success() {
            return Err(AuditError::PageFetch {
                url: url.to_string(),
                details: format!("Failed to fetch page: {}", response.status),
            }
            .into());
        }

        let origin = origin_of(url);
        let features = PageFeatures::extract(&response.body, &origin);
        let resources = self.prober.well_known(&origin).await;

        let result = SeoScorer::score(&features, resources);
        tracing::debug!(url = %url, score = result.score, issues = result.issues.len(), "SEO audit done");
        Ok(result)
    }
}

/// Pure SEO rubric: 100 minus independent, additive deductions, floored at 0
pub struct SeoScorer;

impl SeoScorer {
    pub fn score(features: &PageFeatures, resources: WellKnownResources) -> SeoResult {
        let mut card = ScoreCard::new();

        let title = text_element(features.title.as_deref(), OPTIMAL_TITLE_CHARS);
        if !title.exists {
            card.deduct(
                15,
                Issue::error(
                    "Missing title tag",
                    "Add a descriptive title tag between 30-60 characters",
                ),
            );
        } else if !title.is_optimal {
            card.deduct(
                5,
                Issue::warning(
                    format!(
                        "Title length ({} chars) is {}",
                        title.length,
                        too_short_or_long(title.length, OPTIMAL_TITLE_CHARS)
                    ),
                    "Keep title between 30-60 characters for optimal display in search results",
                ),
            );
        }

        let meta_description =
            text_element(features.meta_description.as_deref(), OPTIMAL_DESCRIPTION_CHARS);
        if !meta_description.exists {
            card.deduct(
                10,
                Issue::error(
                    "Missing meta description",
                    "Add a meta description between 120-160 characters",
                ),
            );
        } else if !meta_description.is_optimal {
            card.deduct(
                3,
                Issue::warning(
                    format!(
                        "Meta description length ({} chars) is {}",
                        meta_description.length,
                        too_short_or_long(meta_description.length, OPTIMAL_DESCRIPTION_CHARS)
                    ),
                    "Keep meta description between 120-160 characters",
                ),
            );
        }

        let h1_count = features.h1_count();
        if h1_count == 0 {
            card.deduct(
                10,
                Issue::error(
                    "Missing H1 heading",
                    "Add exactly one H1 heading that describes the page content",
                ),
            );
        } else if h1_count > 1 {
            card.deduct(
                5,
                Issue::warning(
                    format!("Multiple H1 headings found ({})", h1_count),
                    "Use only one H1 heading per page",
                ),
            );
        }

        let without_alt = features.images_without_alt();
        if without_alt > 0 {
            let points = (without_alt as u32)
                .saturating_mul(MISSING_ALT_POINTS_EACH)
                .min(MISSING_ALT_POINTS_CAP);
            card.deduct(
                points,
                Issue::warning(
                    format!("{} image(s) missing alt text", without_alt),
                    "Add descriptive alt text to all images for accessibility and SEO",
                ),
            );
        }

        if features.canonical.is_none() {
            card.deduct(
                3,
                Issue::info(
                    "No canonical URL specified",
                    "Add a canonical URL to prevent duplicate content issues",
                ),
            );
        }

        let open_graph = OpenGraphTags {
            has_title: features.og_title,
            has_description: features.og_description,
            has_image: features.og_image,
        };
        if !open_graph.is_complete() {
            card.deduct(
                3,
                Issue::info(
                    "Incomplete Open Graph tags",
                    "Add og:title, og:description, and og:image for better social sharing",
                ),
            );
        }

        if !features.twitter_card {
            card.deduct(
                2,
                Issue::info(
                    "Missing Twitter Card tags",
                    "Add Twitter Card tags for better Twitter sharing",
                ),
            );
        }

        if !features.viewport {
            card.deduct(
                10,
                Issue::error(
                    "Missing viewport meta tag",
                    "Add viewport meta tag for mobile responsiveness",
                ),
            );
        }

        if !resources.robots_txt {
            card.deduct(
                2,
                Issue::info(
                    "No robots.txt file found",
                    "Add a robots.txt file to guide search engine crawlers",
                ),
            );
        }

        if !resources.sitemap {
            card.deduct(
                2,
                Issue::info(
                    "No sitemap.xml file found",
                    "Add a sitemap.xml to help search engines discover your pages",
                ),
            );
        }

        let [h1, h2, h3, h4, h5, h6] = features.heading_counts;
        let (score, issues) = card.finish();

        SeoResult {
            score,
            title,
            meta_description,
            headings: HeadingSummary {
                h1_count: h1,
                h2_count: h2,
                h3_count: h3,
                h4_count: h4,
                h5_count: h5,
                h6_count: h6,
                has_proper_hierarchy: h1 == 1 && h2 > 0,
            },
            images: ImageSummary {
                total: features.image_count,
                with_alt: features.images_with_alt,
                without_alt,
            },
            links: LinkSummary {
                internal: features.internal_links,
                external: features.external_links,
                broken: 0,
            },
            canonical: CanonicalTag {
                exists: features.canonical.is_some(),
                url: features.canonical.clone(),
            },
            open_graph,
            twitter_card: TwitterCardTags {
                has_card: features.twitter_card,
                has_title: features.twitter_title,
                has_description: features.twitter_description,
            },
            robots_txt: resources.robots_txt,
            sitemap: resources.sitemap,
            viewport: features.viewport,
            issues,
        }
    }
}

fn text_element(content: Option<&str>, optimal: RangeInclusive<usize>) -> TextElement {
    let length = content.map_or(0, |text| text.chars().count());
    TextElement {
        exists: content.is_some(),
        content: content.map(str::to_string),
        length,
        is_optimal: optimal.contains(&length),
    }
}

fn too_short_or_long(length: usize, optimal: RangeInclusive<usize>) -> &'static str {
    if length < *optimal.start() {
        "too short"
    } else {
        "too long"
    }
}
