use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metafixer::cli::commands::{self, ViewOptions, analyze::AnalyzeOptions};
use metafixer::cli::ui::{OutputFormat, ViewTab};
use metafixer::cli::util::ConfigOverrides;
use metafixer::render::ExportFormat;
use metafixer::types::UiLanguage;

/// Parse UI language from string
fn parse_language(s: &str) -> Result<UiLanguage, String> {
    s.parse()
}

fn parse_tab(s: &str) -> Result<ViewTab, String> {
    s.parse()
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "metafixer")]
#[command(
    version,
    about = "Generate SEO meta tags, keywords and a readiness score for any text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

/// Flags shared by commands that present a result
#[derive(clap::Args)]
struct ViewArgs {
    #[arg(long, value_parser = parse_language, help = "Language for tips and labels: en, bn")]
    lang: Option<UiLanguage>,
    #[arg(long, value_parser = parse_tab, default_value = "all", help = "View: meta, html, keywords, score, all")]
    tab: ViewTab,
    #[arg(short = 'f', long, value_parser = parse_output_format, default_value = "text", help = "Output format: text, json")]
    format: OutputFormat,
    #[arg(long, value_parser = parse_export_format, help = "Write an export file: json, txt")]
    export: Option<ExportFormat>,
    #[arg(short, long, help = "Directory for export files")]
    output: Option<PathBuf>,
}

impl ViewArgs {
    fn view(&self) -> ViewOptions {
        ViewOptions {
            tab: self.tab,
            format: self.format,
            export: self.export,
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            language: self.lang,
            output_dir: self.output.clone(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text and generate meta tags
    Analyze {
        #[arg(help = "Text to analyze (reads stdin when omitted)")]
        text: Option<String>,
        #[arg(long, help = "Read text from a file")]
        file: Option<PathBuf>,
        #[arg(long, help = "LLM provider (gemini, openai)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Re-render an exported JSON result
    Render {
        #[arg(help = "Path to an exported seo-meta-tags.json")]
        path: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mmetafixer encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    // Install panic handler first
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze {
            text,
            file,
            provider,
            model,
            view,
        } => {
            let options = AnalyzeOptions {
                text,
                file,
                overrides: ConfigOverrides {
                    provider,
                    model,
                    ..view.overrides()
                },
                view: view.view(),
            };
            let rt = Runtime::new()?;
            rt.block_on(commands::analyze::run(options))?;
        }
        Commands::Render { path, view } => {
            commands::render::run(&path, &view.overrides(), view.view())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                commands::config::show(global, &format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    commands::config::init_global(force)?;
                } else {
                    commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
