use super::CatalogImportError;
use crate::catalog::domain::{Article, ArticleId, Audience};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_articles<R: Read>(reader: R) -> Result<Vec<Article>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut articles = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let row: CatalogRow = record.deserialize(Some(&headers))?;
        let article = row
            .into_article()
            .map_err(|detail| CatalogImportError::InvalidRow { line, detail })?;
        articles.push(article);
    }

    Ok(articles)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    audience: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    content: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    content_beginner: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    content_advanced: Option<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    alt_text: String,
    read_time: String,
    publish_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    series: Option<String>,
}

impl CatalogRow {
    fn into_article(self) -> Result<Article, String> {
        if self.id.is_empty() {
            return Err("article id is empty".to_string());
        }

        let audience = self
            .audience
            .parse::<Audience>()
            .map_err(|err| err.to_string())?;
        let read_time_minutes = parse_read_time(&self.read_time)
            .ok_or_else(|| format!("unreadable read time '{}'", self.read_time))?;
        let publish_date = parse_publish_date(&self.publish_date)
            .ok_or_else(|| format!("unreadable publish date '{}'", self.publish_date))?;

        Ok(Article {
            id: ArticleId(self.id),
            title: self.title,
            audience,
            tags: split_tags(&self.tags),
            summary: self.summary,
            content: self.content,
            content_beginner: self.content_beginner,
            content_advanced: self.content_advanced,
            image_url: self.image_url,
            alt_text: self.alt_text,
            author: self.author,
            read_time_minutes,
            publish_date,
            series: self.series,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts "6 min", "6min" and "6".
fn parse_read_time(raw: &str) -> Option<u16> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Editorial dates use "Sept" which chrono's %b does not know.
    let normalized = trimmed.replacen("Sept ", "Sep ", 1);
    ["%b %d, %Y", "%B %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
}
