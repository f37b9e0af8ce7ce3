mod html_features;

pub use html_features::PageFeatures;
