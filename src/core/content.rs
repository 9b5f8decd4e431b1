//! Read-only portfolio content: bio, projects and contact details.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 5;

const BUILTIN_CONTENT: &str = include_str!("../builtin_content.toml");

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub demo_url: String,
    pub source_url: String,
}

impl Project {
    /// Lowercased text that `search` matches against.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.tech.join(" ")
        )
        .to_lowercase()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Bio {
    pub name: String,
    pub role: String,
    pub location: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    bio: Bio,
    #[serde(default)]
    projects: Vec<Project>,
    contact: Contact,
    resume_url: String,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// One page of the project list.
#[derive(Debug, Clone, Copy)]
pub struct ProjectPage<'a> {
    pub number: usize,
    pub total_pages: usize,
    /// 1-based global index of the first project on the page.
    pub first_index: usize,
    pub projects: &'a [Project],
}

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(err) => write!(f, "Failed to read content file: {err}"),
            ContentError::Parse(err) => write!(f, "Failed to parse content file: {err}"),
            ContentError::Invalid(msg) => write!(f, "Invalid content: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::Io(err)
    }
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        ContentError::Parse(err)
    }
}

impl Content {
    pub fn builtin() -> Result<Content, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn load_from_path(path: &Path) -> Result<Content, ContentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Content, ContentError> {
        let mut content: Content = toml::from_str(contents)?;
        content.validate()?;
        content.page_size = content.page_size.max(1);
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.bio.name.trim().is_empty() {
            return Err(ContentError::Invalid("bio.name must not be empty".into()));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Invalid(
                "contact.email must not be empty".into(),
            ));
        }
        if let Some(project) = self.projects.iter().find(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "project with demo url {} has no title",
                project.demo_url
            )));
        }
        Ok(())
    }

    /// Override the pagination size. Values below 1 become 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn bio(&self) -> &Bio {
        &self.bio
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by its 1-based index.
    pub fn project(&self, index: usize) -> Option<&Project> {
        index.checked_sub(1).and_then(|i| self.projects.get(i))
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn resume_url(&self) -> &str {
        &self.resume_url
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.projects.len().div_ceil(self.page_size).max(1)
    }

    /// Slice out a 1-based page. Pages past the end are empty.
    pub fn page(&self, number: usize) -> ProjectPage<'_> {
        let number = number.max(1);
        let start = (number - 1).saturating_mul(self.page_size);
        let projects = if start >= self.projects.len() {
            &self.projects[0..0]
        } else {
            let end = (start + self.page_size).min(self.projects.len());
            &self.projects[start..end]
        };
        ProjectPage {
            number,
            total_pages: self.total_pages(),
            first_index: start.saturating_add(1),
            projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_content_parses() {
        let content = Content::builtin().expect("builtin content");
        assert!(!content.projects().is_empty());
        assert_eq!(content.page_size(), DEFAULT_PAGE_SIZE);
        assert!(!content.contact().email.is_empty());
    }

    #[test]
    fn project_lookup_is_one_based() {
        let content = Content::builtin().unwrap();
        assert_eq!(content.project(1), content.projects().first());
        assert!(content.project(0).is_none());
        assert!(content.project(content.projects().len() + 1).is_none());
    }

    #[test]
    fn pages_slice_projects_in_order() {
        let content = Content::builtin().unwrap().with_page_size(3);
        let first = content.page(1);
        assert_eq!(first.first_index, 1);
        assert_eq!(first.projects.len(), 3);
        let second = content.page(2);
        assert_eq!(second.first_index, 4);
        assert_eq!(second.projects[0], content.projects()[3]);
        let beyond = content.page(99);
        assert!(beyond.projects.is_empty());
        assert_eq!(content.total_pages(), content.projects().len().div_ceil(3));
    }

    #[test]
    fn page_at_usize_max_is_empty() {
        let content = Content::builtin().unwrap();
        let page = content.page(usize::MAX);
        assert_eq!(page.number, usize::MAX);
        assert!(page.projects.is_empty());
        assert_eq!(page.first_index, usize::MAX);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let content = Content::builtin().unwrap().with_page_size(0);
        assert_eq!(content.page_size(), 1);
    }

    #[test]
    fn load_from_path_reads_custom_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
resume_url = "https://example.com/cv.pdf"
page_size = 2

[bio]
name = "Sam"
role = "Dev"
location = "Earth"
about = "Hi"

[contact]
email = "sam@example.com"

[[projects]]
title = "one"
description = "first"
demo_url = "https://one.example.com"
source_url = "https://src.example.com/one"
"#,
        )
        .unwrap();

        let content = Content::load_from_path(&path).unwrap();
        assert_eq!(content.bio().name, "Sam");
        assert_eq!(content.page_size(), 2);
        assert!(content.projects()[0].tech.is_empty());
        assert!(content.contact().socials.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Content::from_toml_str(
            r#"
resume_url = "x"
[bio]
name = " "
role = ""
location = ""
about = ""
[contact]
email = "a@b.c"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn haystack_joins_fields_lowercased() {
        let project = Project {
            title: "Zensu".into(),
            description: "Calm Productivity Tool".into(),
            tech: vec!["Rust".into()],
            demo_url: String::new(),
            source_url: String::new(),
        };
        assert_eq!(project.search_haystack(), "zensu calm productivity tool rust");
    }
}
