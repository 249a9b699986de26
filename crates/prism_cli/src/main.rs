use std::sync::Arc;

use clap::Parser;
use tracing::info;

use prism_analysis::Analyzer;
use prism_core::{Analysis, AnalysisOutcome, Intensity, PrismConfig, Region, Result, Settings};
use prism_web::AppState;

#[derive(Parser, Debug)]
#[command(name = "prism", author, version, about = "Topic-driven news analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze a topic and print the three-section digest
    Analyze {
        /// The topic to analyze (multiple words allowed without quotes)
        #[arg(required = true)]
        topic: Vec<String>,
        /// Geographic scope for news retrieval
        #[arg(long, value_enum, default_value = "global")]
        region: Region,
        /// How critically retrieved content is framed
        #[arg(long, value_enum, default_value = "standard")]
        intensity: Intensity,
        /// Bypass all backends and return the offline backup report
        #[arg(long)]
        demo: bool,
    },
    /// Serve the analysis pipeline as a JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
        /// Bypass all backends and serve offline backup reports
        #[arg(long)]
        demo: bool,
    },
}

fn build_analyzer(demo: bool) -> Result<Analyzer> {
    let mut config = PrismConfig::from_env();
    config.demo_mode = demo;
    Analyzer::from_config(&config)
}

fn print_section(emoji: &str, section: &prism_core::Section) {
    println!("{} {}", emoji, section.title);
    for point in &section.points {
        println!("  • {}", point);
    }
    println!();
}

fn print_report(report: &Analysis) {
    println!("Topic: {}\n", report.topic);
    print_section("🛑", &report.critic);
    print_section("⚖️", &report.facts);
    print_section("✅", &report.proponent);
    if !report.sources.is_empty() {
        println!("Sources: {}", report.sources.join(", "));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            topic,
            region,
            intensity,
            demo,
        } => {
            let analyzer = build_analyzer(demo)?;
            let topic = topic.join(" ");
            let settings = Settings { region, intensity };

            match analyzer.analyze(&topic, &settings).await {
                AnalysisOutcome::Report(report) => print_report(&report),
                AnalysisOutcome::Failure { error } => {
                    eprintln!("❌ {}", error);
                    std::process::exit(1);
                }
            }
        }
        Commands::Serve { addr, demo } => {
            let analyzer = build_analyzer(demo)?;
            let app = prism_web::create_app(AppState {
                analyzer: Arc::new(analyzer),
            })
            .await;

            info!("🌐 Listening on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
