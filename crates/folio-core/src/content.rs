//! Site content model.
//!
//! Everything the pages render (phrases, projects, resume entries, ...)
//! is described in a TOML document so the components stay data-free.

use serde::Deserialize;

use crate::error::ContentError;
use crate::typing::TypingSpeeds;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: Owner,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub about: Vec<AboutCard>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub resume: Resume,
    pub contact: Contact,
}

impl SiteContent {
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }

    /// Projects marked as featured, for the home page.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub greeting: String,
    pub phrases: Vec<String>,
    pub speeds: TypingSpeeds,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub icon: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Post {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub category: String,
}

impl Post {
    /// Categories as a slice, so posts and projects share the filter code.
    pub fn categories(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub tabs: Vec<ResumeTab>,
    pub timeline: Vec<TimelineItem>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeTab {
    /// Tab id; its section is rendered with id `<id>-section`.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
    #[serde(default)]
    pub bars: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeEntry {
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimelineItem {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Language {
    pub name: String,
    /// Filled dots out of five.
    pub level: u8,
}

impl Language {
    pub const MAX_LEVEL: u8 = 5;

    pub fn filled(&self) -> usize {
        usize::from(self.level.min(Self::MAX_LEVEL))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub intro: String,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Subject {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [owner]
        name = "Test Person"
        tagline = "Builds things"

        [hero]
        phrases = ["One", "Two"]

        [hero.speeds]
        type_ms = 80

        [[projects]]
        title = "Rover"
        summary = "A rover"
        categories = ["robotics"]
        featured = true

        [[projects]]
        title = "Solver"
        summary = "A solver"
        categories = ["simulation", "physics"]

        [[posts]]
        title = "Hello"
        date = "2024-01-01"
        excerpt = "First post"
        category = "notes"
    "#;

    #[test]
    fn test_parse_sample() {
        let content = SiteContent::from_toml(SAMPLE).unwrap();
        assert_eq!(content.owner.name, "Test Person");
        assert_eq!(content.hero.phrases, vec!["One", "Two"]);
        assert_eq!(content.hero.speeds.type_ms, 80);
        assert_eq!(content.hero.speeds.hold_full_ms, 2000);
        assert_eq!(content.featured_projects().count(), 1);
        assert_eq!(content.posts[0].categories(), ["notes".to_string()]);
        assert!(content.resume.tabs.is_empty());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SiteContent::from_toml("").unwrap(), SiteContent::default());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteContent::from_toml("[hero]\nphrases = 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid site content"));
    }

    #[test]
    fn test_language_dots_capped() {
        let lang = Language {
            name: "Rust".into(),
            level: 9,
        };
        assert_eq!(lang.filled(), 5);
    }
}
