use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sportai_core::{
    AnalysisResult, Asset, ClientConfig, ContentCache, HttpTransport, Panel, PanelState,
    Settled, VideoFile, WorkflowState, format_analysis_readable, format_asset, open_panel,
    submit_analysis, submit_upload,
};
use tracing_subscriber::EnvFilter;

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "sportai")]
#[command(about = "Upload sports videos to SportAI and print the AI-powered strategic summary")]
struct Cli {
    /// Backend base URL. Falls back to SPORTAI_API_URL, then http://localhost:8000
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a video and print the stored asset
    Upload {
        /// Path to an .mp4 file
        file: PathBuf,

        /// Run the analysis right after the upload
        #[arg(short, long)]
        analyze: bool,
    },
    /// Analyze a video that was uploaded earlier
    Analyze {
        #[arg(long)]
        file_id: String,

        #[arg(long)]
        gcs_uri: String,
    },
    /// Print the app description
    Header,
    /// Print the backend README
    Readme,
    /// Print the architecture diagram URL
    Architecture,
}

fn create_spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

fn divider() {
    println!("{}", style("─".repeat(60)).dim());
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::resolve(cli.base_url) {
        Ok(config) => config,
        Err(e) => fail(&e.to_string()),
    };
    let transport = HttpTransport::new(&config)?;

    println!(
        "\n{}  {}\n",
        style("sportai").cyan().bold(),
        style(transport.base_url()).dim()
    );

    match cli.command {
        Command::Upload { file, analyze } => upload(&transport, file, analyze).await,
        Command::Analyze { file_id, gcs_uri } => {
            analyze_existing(&transport, file_id, gcs_uri).await
        }
        Command::Header => show_panel(&transport, Panel::Main).await,
        Command::Readme => show_panel(&transport, Panel::Readme).await,
        Command::Architecture => show_panel(&transport, Panel::Architecture).await,
    }
}

async fn upload(transport: &HttpTransport, file: PathBuf, analyze: bool) -> Result<()> {
    let mut state = WorkflowState::new();
    let video = VideoFile::new(file);
    let total_start = Instant::now();

    // Step 1: Upload
    let step_start = Instant::now();
    let spinner = create_spinner(&format!("Uploading {}...", video.file_name()))?;
    let settled = submit_upload(&mut state, transport, video).await;
    spinner.finish_and_clear();
    let Some(asset) = state.asset().filter(|_| settled == Settled::Applied).cloned() else {
        fail(&notice_text(&state, "upload failed"));
    };
    println!(
        "{} Uploaded: {} {}",
        style("✓").green().bold(),
        style(&asset.file_id).yellow(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    );

    if !analyze {
        divider();
        println!("{}", format_asset(&asset));
        return Ok(());
    }

    // Step 2: Analyze
    let step_start = Instant::now();
    let spinner = create_spinner("Analyzing video...")?;
    let settled = submit_analysis(&mut state, transport).await;
    spinner.finish_and_clear();
    let Some(result) = state.result().filter(|_| settled == Settled::Applied).cloned() else {
        fail(&notice_text(&state, "analysis failed"));
    };
    println!(
        "{} Analysis complete {}",
        style("✓").green().bold(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    );

    print_analysis(&asset, &result, total_start);
    Ok(())
}

async fn analyze_existing(
    transport: &HttpTransport,
    file_id: String,
    gcs_uri: String,
) -> Result<()> {
    let asset = Asset {
        file_id,
        storage_uri: gcs_uri,
        playback_url: String::new(),
    };
    let mut state = WorkflowState::with_asset(asset.clone());
    let total_start = Instant::now();

    let spinner = create_spinner("Analyzing video...")?;
    let settled = submit_analysis(&mut state, transport).await;
    spinner.finish_and_clear();
    let Some(result) = state.result().filter(|_| settled == Settled::Applied).cloned() else {
        fail(&notice_text(&state, "analysis failed"));
    };
    println!("{} Analysis complete", style("✓").green().bold());

    print_analysis(&asset, &result, total_start);
    Ok(())
}

fn print_analysis(asset: &Asset, result: &AnalysisResult, total_start: Instant) {
    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    divider();
    println!("{}", format_analysis_readable(asset, result));
}

async fn show_panel(transport: &HttpTransport, panel: Panel) -> Result<()> {
    let mut cache = ContentCache::new();
    let spinner = create_spinner(&format!("Loading {}...", panel.label()))?;
    let state = open_panel(&mut cache, transport, panel).await;
    spinner.finish_and_clear();

    if matches!(state, PanelState::Failed) {
        fail(&format!("Failed to load {}", panel.label()));
    }

    divider();
    match panel {
        Panel::Main => println!("{}", cache.description()),
        Panel::Readme => println!("{}", cache.readme().unwrap_or_default()),
        Panel::Architecture => match cache.architecture_image() {
            Some(url) if !url.is_empty() => println!("{}", style(url).cyan()),
            _ => fail("Failed to load architecture image."),
        },
    }
    Ok(())
}

fn notice_text(state: &WorkflowState, fallback: &str) -> String {
    state
        .notice()
        .map(|n| n.message.clone())
        .unwrap_or_else(|| fallback.to_string())
}
