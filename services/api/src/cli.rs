use crate::demo::{
    run_demo, run_hub, run_recommend, run_roadmap, DemoArgs, HubArgs, RecommendArgs, RoadmapArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vida_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vida Insights",
    about = "Serve and explore cybersecurity article recommendations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Recommend articles for a single visitor profile
    Recommend(RecommendArgs),
    /// Render a role, topic, series or archive hub
    Hub(HubArgs),
    /// Print the learning roadmap for every audience
    Roadmap(RoadmapArgs),
    /// Walk through recommendations for each audience with the built-in catalog
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Hub(args) => run_hub(args),
        Command::Roadmap(args) => run_roadmap(args),
        Command::Demo(args) => run_demo(args),
    }
}
