//! Article catalog: the read-only content snapshot plus the role, topic,
//! series and archive views built on top of it.

pub mod domain;
pub mod hubs;
pub mod import;
pub mod roadmap;
pub mod router;
mod seed;

pub use domain::{
    Article, ArticleId, Audience, Catalog, CatalogError, Complexity, Language, PrimaryTag,
};
pub use hubs::{
    hub_view, related_articles, ArticleDetailView, HubError, HubKind, HubView, ReadTimeFilter,
};
pub use import::{CatalogFormat, CatalogImportError, CatalogImporter};
pub use roadmap::{LearningPath, Roadmap, RoadmapPathView};
pub use router::catalog_router;
