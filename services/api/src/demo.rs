use crate::infra::load_catalog;
use clap::Args;
use std::path::PathBuf;
use vida_insights::catalog::{
    hub_view, ArticleId, Audience, Catalog, HubKind, ReadTimeFilter, Roadmap,
};
use vida_insights::config::AppConfig;
use vida_insights::error::AppError;
use vida_insights::recommendations::{
    EngineConfig, JitterMode, RecommendationEngine, RecommendationResponse, VisitorProfile,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Visitor role: student, business, parent, educator or all
    #[arg(long)]
    pub(crate) role: Audience,
    /// Saved topic of interest (repeatable)
    #[arg(long = "topic")]
    pub(crate) topics: Vec<String>,
    /// Article id the visitor already finished (repeatable)
    #[arg(long)]
    pub(crate) completed: Vec<String>,
    /// Seed the tie-break jitter for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Override the number of recommendations returned
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the rule trace after the recommendations
    #[arg(long)]
    pub(crate) trace: bool,
    /// CSV or JSON catalog export (defaults to APP_CATALOG_PATH or the built-in catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct HubArgs {
    /// Hub kind: role, topic, series or archive
    pub(crate) kind: String,
    /// Role slug, topic name, series name or YYYY[-MM] prefix
    pub(crate) value: String,
    /// Restrict the listing to short, medium or long reads
    #[arg(long)]
    pub(crate) read_time: Option<ReadTimeFilter>,
    /// CSV or JSON catalog export (defaults to APP_CATALOG_PATH or the built-in catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RoadmapArgs {
    /// CSV or JSON catalog export (defaults to APP_CATALOG_PATH or the built-in catalog)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the rule trace for every audience
    #[arg(long)]
    pub(crate) trace: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.path.as_deref()))?;

    let mut engine_config = config.recommendations;
    if let Some(seed) = args.seed {
        engine_config.jitter = JitterMode::Seeded { seed };
    }
    if let Some(limit) = args.limit.filter(|limit| *limit > 0) {
        engine_config.max_results = limit;
    }
    let engine = RecommendationEngine::new(engine_config);

    let profile = visitor_profile(args.role, args.topics, args.completed);
    let response = engine.recommend(&profile, &catalog);

    println!(
        "Recommendations for {} in {} ({} articles in catalog)",
        profile.role.label(),
        profile.language.label(),
        catalog.len()
    );
    render_recommendations(&response, args.trace);
    Ok(())
}

pub(crate) fn run_hub(args: HubArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.path.as_deref()))?;
    let engine = RecommendationEngine::new(config.recommendations);

    let kind = HubKind::from_parts(&args.kind, &args.value)?;
    let view = hub_view(&catalog, &engine, &kind, args.read_time);

    println!("{}", view.title);
    println!("{}", view.description);
    if !view.featured.is_empty() {
        let featured: Vec<&str> = view
            .featured
            .iter()
            .map(|article| article.title.as_str())
            .collect();
        println!("Featured: {}", featured.join(" | "));
    }
    if !view.related_topics.is_empty() {
        println!("Related topics: {}", view.related_topics.join(", "));
    }
    if view.latest.is_empty() {
        println!("- no articles match");
    }
    for article in &view.latest {
        println!(
            "- [{}] {} | {} | {} min | {}",
            article.id,
            article.title,
            article.audience.label(),
            article.read_time_minutes,
            article.publish_date
        );
    }

    if !view.recommendations.is_empty() {
        println!("\nRecommended next");
        for recommendation in &view.recommendations {
            println!(
                "- [{}] {} ({})",
                recommendation.article_id, recommendation.title, recommendation.reason
            );
        }
    }

    Ok(())
}

pub(crate) fn run_roadmap(args: RoadmapArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog.as_deref().or(config.catalog.path.as_deref()))?;
    render_roadmap(&catalog);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = Catalog::standard();
    let engine = RecommendationEngine::new(EngineConfig::default());

    println!("Article recommendation demo ({} articles)", catalog.len());
    for role in Audience::ordered() {
        println!("\nFirst visit as {}", role.label());
        let response = engine.recommend(&VisitorProfile::anonymous(role), &catalog);
        render_recommendations(&response, args.trace);
    }

    println!("\nReturning student who finished article 1 and saved Phishing");
    let returning = visitor_profile(
        Audience::Student,
        vec!["Phishing".to_string()],
        vec!["1".to_string()],
    );
    render_recommendations(&engine.recommend(&returning, &catalog), true);

    println!();
    render_roadmap(&catalog);
    Ok(())
}

fn visitor_profile(role: Audience, topics: Vec<String>, completed: Vec<String>) -> VisitorProfile {
    let profile = topics
        .into_iter()
        .fold(VisitorProfile::anonymous(role), |profile, topic| {
            profile.with_saved_topic(topic)
        });
    completed
        .into_iter()
        .fold(profile, |profile, id| profile.with_completed(ArticleId(id)))
}

fn render_recommendations(response: &RecommendationResponse, include_trace: bool) {
    if response.recommendations.is_empty() {
        println!("- nothing left to recommend");
    }
    for (index, recommendation) in response.recommendations.iter().enumerate() {
        println!(
            "{}. [{}] {} | score {:.1}",
            index + 1,
            recommendation.article_id,
            recommendation.title,
            recommendation.score
        );
        println!(
            "   {} -> {}",
            recommendation.reason, recommendation.next_step
        );
    }

    if include_trace {
        println!("  Trace:");
        for rule in &response.trace.applied_rules {
            println!("    - {}", rule);
        }
        if !response.trace.filtered_ids.is_empty() {
            let ids: Vec<&str> = response
                .trace
                .filtered_ids
                .iter()
                .map(|id| id.as_str())
                .collect();
            println!("    completed: {}", ids.join(", "));
        }
        if !response.trace.audience_excluded_ids.is_empty() {
            let ids: Vec<&str> = response
                .trace
                .audience_excluded_ids
                .iter()
                .map(|id| id.as_str())
                .collect();
            println!("    other audiences: {}", ids.join(", "));
        }
    }
}

fn render_roadmap(catalog: &Catalog) {
    println!("Learning roadmap");
    for path in Roadmap::resolve(catalog) {
        println!("\n{} ({})", path.title, path.audience.label());
        println!("{}", path.description);
        if path.steps.is_empty() {
            println!("  (no steps available in this catalog)");
        }
        for step in &path.steps {
            println!(
                "  {}. [{}] {} | {} min",
                step.position, step.article_id, step.title, step.read_time_minutes
            );
        }
    }
}
