use super::domain::{
    distinct_tags, Article, ArticleId, Audience, Catalog, CatalogError, Complexity,
};
use crate::recommendations::{Recommendation, RecommendationEngine, VisitorProfile};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Landing pages that group the catalog by one facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubKind {
    Role(Audience),
    Topic(String),
    Series(String),
    /// `YYYY` or `YYYY-MM` prefix of the publish date.
    Archive(String),
}

impl HubKind {
    /// Builds a hub from its URL segments, e.g. `("role", "parent")`.
    pub fn from_parts(kind: &str, value: &str) -> Result<Self, HubError> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "role" => Ok(Self::Role(value.parse::<Audience>()?)),
            "topic" => Ok(Self::Topic(value.to_string())),
            "series" => Ok(Self::Series(value.to_string())),
            "archive" => Ok(Self::Archive(value.trim().to_string())),
            _ => Err(HubError::UnknownKind(kind.to_string())),
        }
    }

    /// The URL value the hub was built from.
    pub fn value(&self) -> &str {
        match self {
            HubKind::Role(role) => role.slug(),
            HubKind::Topic(value) | HubKind::Series(value) | HubKind::Archive(value) => value,
        }
    }

    fn includes(&self, article: &Article) -> bool {
        match self {
            HubKind::Role(role) => article.is_visible_to(*role),
            HubKind::Topic(topic) => article.has_tag(topic),
            HubKind::Series(series) => article.series.as_deref() == Some(series.as_str()),
            HubKind::Archive(prefix) => article
                .publish_date
                .format("%Y-%m-%d")
                .to_string()
                .starts_with(prefix.as_str()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            HubKind::Role(role) => format!("{} Hub", role.label()),
            HubKind::Topic(topic) => format!("Topic: {topic}"),
            HubKind::Series(series) => format!("{series} - Series"),
            HubKind::Archive(prefix) => format!("Archive: {prefix}"),
        }
    }

    pub fn description(&self) -> String {
        match self {
            HubKind::Role(role) => format!(
                "Curated learning paths, guides, and essential security resources tailored for {}s.",
                role.slug()
            ),
            HubKind::Topic(topic) => {
                format!("Everything we have published about {topic}.")
            }
            HubKind::Series(series) => format!(
                "A curated collection of articles in the \"{series}\" series. Follow the path to mastery."
            ),
            HubKind::Archive(prefix) => format!("Articles published in {prefix}."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadTimeFilter {
    Short,
    Medium,
    Long,
}

impl ReadTimeFilter {
    pub fn matches(self, minutes: u16) -> bool {
        match self {
            Self::Short => minutes < 5,
            Self::Medium => (5..10).contains(&minutes),
            Self::Long => minutes >= 10,
        }
    }
}

impl FromStr for ReadTimeFilter {
    type Err = HubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(HubError::UnknownReadTime(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummaryView {
    pub id: ArticleId,
    pub title: String,
    pub audience: Audience,
    pub tags: Vec<String>,
    pub summary: String,
    pub read_time_minutes: u16,
    pub publish_date: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub image_url: String,
    pub alt_text: String,
}

impl From<&Article> for ArticleSummaryView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            audience: article.audience,
            tags: article.tags.clone(),
            summary: article.summary.clone(),
            read_time_minutes: article.read_time_minutes,
            publish_date: article.publish_date,
            series: article.series.clone(),
            image_url: article.image_url.clone(),
            alt_text: article.alt_text.clone(),
        }
    }
}

/// One article rendered at a chosen reading level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetailView {
    #[serde(flatten)]
    pub summary: ArticleSummaryView,
    pub author: String,
    pub complexity: Complexity,
    pub content: String,
}

impl ArticleDetailView {
    pub fn new(article: &Article, complexity: Complexity) -> Self {
        Self {
            summary: ArticleSummaryView::from(article),
            author: article.author.clone(),
            complexity,
            content: article.content_for(complexity).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubView {
    pub title: String,
    pub description: String,
    /// Newest two hub articles; archives have none.
    pub featured: Vec<ArticleSummaryView>,
    pub latest: Vec<ArticleSummaryView>,
    /// Other tags found in the hub, excluding the hub's own value.
    pub related_topics: Vec<String>,
    /// Only populated for role hubs.
    pub recommendations: Vec<Recommendation>,
}

const FEATURED_LIMIT: usize = 2;
const RELATED_TOPIC_LIMIT: usize = 8;

pub fn hub_view(
    catalog: &Catalog,
    engine: &RecommendationEngine,
    kind: &HubKind,
    read_time: Option<ReadTimeFilter>,
) -> HubView {
    let mut latest: Vec<&Article> = catalog
        .articles()
        .iter()
        .filter(|article| kind.includes(article))
        .filter(|article| read_time.map_or(true, |filter| filter.matches(article.read_time_minutes)))
        .collect();
    // Stable: same-day articles keep catalog order.
    latest.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

    let featured = match kind {
        HubKind::Archive(_) => Vec::new(),
        _ => latest
            .iter()
            .take(FEATURED_LIMIT)
            .map(|article| ArticleSummaryView::from(*article))
            .collect(),
    };

    let related_topics = distinct_tags(latest.iter().copied())
        .into_iter()
        .filter(|tag| *tag != kind.value())
        .take(RELATED_TOPIC_LIMIT)
        .map(str::to_string)
        .collect();

    let recommendations = match kind {
        HubKind::Role(role) => {
            engine
                .recommend(&VisitorProfile::anonymous(*role), catalog)
                .recommendations
        }
        _ => Vec::new(),
    };

    HubView {
        title: kind.title(),
        description: kind.description(),
        featured,
        latest: latest.into_iter().map(ArticleSummaryView::from).collect(),
        related_topics,
        recommendations,
    }
}

/// Other articles sharing the audience or any tag with `id`, in catalog order.
pub fn related_articles<'a>(
    catalog: &'a Catalog,
    id: &ArticleId,
    limit: usize,
) -> Result<Vec<&'a Article>, CatalogError> {
    let anchor = catalog
        .get(id)
        .ok_or_else(|| CatalogError::ArticleNotFound(id.clone()))?;

    Ok(catalog
        .articles()
        .iter()
        .filter(|article| article.id != anchor.id)
        .filter(|article| {
            article.audience == anchor.audience
                || article.tags.iter().any(|tag| anchor.has_tag(tag))
        })
        .take(limit)
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HubError {
    #[error("unknown hub kind '{0}' (expected role, topic, series or archive)")]
    UnknownKind(String),
    #[error("unknown read time filter '{0}' (expected short, medium or long)")]
    UnknownReadTime(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(view: &HubView) -> Vec<&str> {
        view.latest.iter().map(|article| article.title.as_str()).collect()
    }

    #[test]
    fn role_hub_lists_visible_articles_newest_first() {
        let catalog = Catalog::standard();
        let engine = RecommendationEngine::default();

        let view = hub_view(&catalog, &engine, &HubKind::Role(Audience::Parent), None);

        assert_eq!(view.title, "Parent Hub");
        assert_eq!(view.featured.len(), 2);
        assert_eq!(
            view.related_topics,
            vec![
                "MFA",
                "Basics",
                "Security Tools",
                "Cyberbullying",
                "Parental Controls",
                "Social Media",
            ]
        );
        assert_eq!(
            titles(&view),
            vec![
                "What is Multi-Factor Authentication (MFA)?",
                "Keeping Kids Safe: A Parent’s Guide to Social Media",
            ]
        );
        assert_eq!(view.recommendations.len(), 2);
        assert_eq!(view.recommendations[0].article_id, ArticleId::from("3"));
    }

    #[test]
    fn topic_hub_has_no_recommendations() {
        let catalog = Catalog::standard();
        let engine = RecommendationEngine::default();

        let view = hub_view(
            &catalog,
            &engine,
            &HubKind::Topic("Basics".to_string()),
            Some(ReadTimeFilter::Medium),
        );

        assert_eq!(view.title, "Topic: Basics");
        assert!(view.recommendations.is_empty());
        assert!(view
            .latest
            .iter()
            .all(|article| article.tags.iter().any(|tag| tag == "Basics")
                && (5..10).contains(&article.read_time_minutes)));
        assert_eq!(view.latest.len(), 3);
    }

    #[test]
    fn archive_hub_matches_date_prefix() {
        let catalog = Catalog::standard();
        let engine = RecommendationEngine::default();

        let view = hub_view(&catalog, &engine, &HubKind::Archive("2024-02".into()), None);

        let ids: Vec<&str> = view.latest.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "5"]);
        assert!(view.featured.is_empty());
    }

    #[test]
    fn topic_hub_features_newest_and_lists_other_topics() {
        let catalog = Catalog::standard();
        let engine = RecommendationEngine::default();

        let view = hub_view(&catalog, &engine, &HubKind::Topic("Basics".into()), None);

        let featured: Vec<&str> = view.featured.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(featured, vec!["7", "6"]);
        assert_eq!(
            view.related_topics,
            vec!["MFA", "Security Tools", "Checklist", "Strategy", "Passwords"]
        );
    }

    #[test]
    fn related_topics_are_capped() {
        let tags: Vec<String> = std::iter::once("Phishing".to_string())
            .chain((1..=10).map(|n| format!("Topic {n}")))
            .collect();
        let article = Article {
            id: ArticleId::from("1"),
            title: "Everything about phishing".to_string(),
            audience: Audience::All,
            tags,
            summary: String::new(),
            content: String::new(),
            content_beginner: None,
            content_advanced: None,
            image_url: String::new(),
            alt_text: String::new(),
            author: "Tech Team".to_string(),
            read_time_minutes: 4,
            publish_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            series: None,
        };
        let catalog = Catalog::new(vec![article]).expect("catalog builds");

        let view = hub_view(
            &catalog,
            &RecommendationEngine::default(),
            &HubKind::Topic("Phishing".into()),
            None,
        );

        assert_eq!(view.related_topics.len(), 8);
        assert_eq!(view.related_topics.first().map(String::as_str), Some("Topic 1"));
        assert!(!view.related_topics.iter().any(|tag| tag == "Phishing"));
        assert_eq!(view.featured.len(), 1);
    }

    #[test]
    fn detail_view_renders_requested_level() {
        let catalog = Catalog::standard();
        let article = catalog.get(&ArticleId::from("2")).expect("ransomware guide");

        let detail = ArticleDetailView::new(article, Complexity::Advanced);

        assert_eq!(detail.complexity, Complexity::Advanced);
        assert_eq!(detail.content, article.content_for(Complexity::Advanced));
        assert_eq!(detail.summary.id, article.id);
    }

    #[test]
    fn hub_kind_parsing_rejects_unknown_values() {
        assert_eq!(
            HubKind::from_parts("role", "educator"),
            Ok(HubKind::Role(Audience::Educator))
        );
        assert!(matches!(
            HubKind::from_parts("role", "pirate"),
            Err(HubError::Catalog(CatalogError::UnknownAudience(_)))
        ));
        assert!(matches!(
            HubKind::from_parts("galaxy", "x"),
            Err(HubError::UnknownKind(_))
        ));
    }

    #[test]
    fn related_articles_share_audience_or_tag() {
        let catalog = Catalog::standard();

        let related =
            related_articles(&catalog, &ArticleId::from("1"), 10).expect("article exists");
        let ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(ids, vec!["7", "5", "6"]);
        assert!(matches!(
            related_articles(&catalog, &ArticleId::from("99"), 3),
            Err(CatalogError::ArticleNotFound(_))
        ));
    }
}
