use anyhow::Result;
use clap::Parser;

use skillsafe::analyze::analyze_skill;
use skillsafe::output::terminal::print_report;
use skillsafe::provider::GithubClient;

#[derive(Parser, Debug)]
#[command(name = "skillsafe")]
#[command(about = "Analyze marketplace skills and generate trust scores")]
struct Args {
    /// Skill URL, marketplace URL, or owner/repo shorthand
    locator: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// GitHub API token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let token = args.token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    let client = GithubClient::new(token);

    let report = analyze_skill(&args.locator, &client).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
