use log::{error, info};
use serde::Deserialize;

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    #[serde(default)]
    pub video: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Franchise {
    pub name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Branch {
    pub name: String,
    pub city: String,
    pub image: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Everything the landing page renders. Missing sections come back empty and
/// the matching carousel stays inert.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: Vec<HeroSlide>,
    #[serde(default)]
    pub franchises: Vec<Franchise>,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

pub fn parse(json: &str) -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn site_content() -> SiteContent {
    match parse(BUNDLED_CONTENT) {
        Ok(content) => {
            info!(
                "Loaded site content: {} slides, {} franchises, {} branches",
                content.hero.len(),
                content.franchises.len(),
                content.branches.len()
            );
            content
        }
        Err(e) => {
            error!("Failed to parse site content: {}", e);
            SiteContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = parse(BUNDLED_CONTENT).expect("bundled content is valid");
        assert!(!content.hero.is_empty());
        assert!(content.branches.len() >= 5);
        assert_eq!(content.hero[1].video.as_deref(), Some("/assets/hero/franchise.mp4"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = parse(r#"{"hero": []}"#).unwrap();
        assert_eq!(content, SiteContent::default());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse(r#"{"hero": [{"title": 3}]}"#).is_err());
        assert!(parse("not json").is_err());
    }
}
