use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Role an article targets. `All` is the wildcard audience and doubles as the
/// "no particular role" choice for visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Student,
    Business,
    Parent,
    Educator,
    All,
}

impl Audience {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::All,
            Self::Student,
            Self::Parent,
            Self::Business,
            Self::Educator,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Business => "business",
            Self::Parent => "parent",
            Self::Educator => "educator",
            Self::All => "all",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Business => "Business",
            Self::Parent => "Parent",
            Self::Educator => "Educator",
            Self::All => "Everyone",
        }
    }

    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Audience {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" | "students" => Ok(Self::Student),
            "business" | "businesses" => Ok(Self::Business),
            "parent" | "parents" => Ok(Self::Parent),
            "educator" | "educators" => Ok(Self::Educator),
            "all" | "everyone" => Ok(Self::All),
            _ => Err(CatalogError::UnknownAudience(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Sw,
    Hi,
}

impl Language {
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Sw => "Kiswahili",
            Self::Hi => "हिन्दी",
        }
    }
}

/// Reading level a visitor picks for an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Beginner,
    Advanced,
}

impl Complexity {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Complexity {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CatalogError::UnknownComplexity(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Diversity key of an article: its first tag, or the shared bucket for
/// articles that carry no tags at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryTag<'a> {
    Tagged(&'a str),
    Untagged,
}

impl<'a> PrimaryTag<'a> {
    pub fn as_tag(self) -> Option<&'a str> {
        match self {
            Self::Tagged(tag) => Some(tag),
            Self::Untagged => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub audience: Audience,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Standard markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_beginner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_advanced: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub author: String,
    pub read_time_minutes: u16,
    pub publish_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl Article {
    pub fn primary_tag(&self) -> PrimaryTag<'_> {
        match self.tags.first() {
            Some(tag) => PrimaryTag::Tagged(tag.as_str()),
            None => PrimaryTag::Untagged,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Body written for `complexity`, or the standard body when the article
    /// has no version at that level.
    pub fn content_for(&self, complexity: Complexity) -> &str {
        let variant = match complexity {
            Complexity::Beginner => self.content_beginner.as_deref(),
            Complexity::Advanced => self.content_advanced.as_deref(),
        };
        variant
            .filter(|body| !body.is_empty())
            .unwrap_or(self.content.as_str())
    }

    /// Audience eligibility: the article targets the role or everyone.
    pub fn is_visible_to(&self, role: Audience) -> bool {
        self.audience == role || self.audience.is_wildcard()
    }
}

/// Read-only snapshot of every article offered by the site.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: Vec<Article>,
    index: HashMap<ArticleId, usize>,
}

impl Catalog {
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if index.insert(article.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateArticle(article.id.clone()));
            }
        }

        Ok(Self { articles, index })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &ArticleId) -> Option<&Article> {
        self.index.get(id).map(|&position| &self.articles[position])
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Distinct tags in first-seen order.
    pub fn topics(&self) -> Vec<&str> {
        distinct_tags(&self.articles)
    }

    /// Distinct series names in first-seen order.
    pub fn series(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .filter_map(|article| article.series.as_deref())
            .filter(|series| seen.insert(*series))
            .collect()
    }
}

/// Tags of `articles` in first-seen order, without repeats.
pub(crate) fn distinct_tags<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .flat_map(|article| article.tags.iter())
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate article id '{0}' in catalog")]
    DuplicateArticle(ArticleId),
    #[error("unknown audience '{0}'")]
    UnknownAudience(String),
    #[error("article '{0}' not found")]
    ArticleNotFound(ArticleId),
    #[error("unknown complexity '{0}' (expected beginner or advanced)")]
    UnknownComplexity(String),
}
