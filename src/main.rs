//! mdpages CLI - build a static site or convert a single Markdown file

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mdpages::site::{build_site, SiteConfig};

#[derive(Parser)]
#[command(name = "mdpages", version, about = "Markdown to static HTML pages")]
struct Cli {
    /// Log every copied file and template in use
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site
    Build(BuildArgs),

    /// Convert one Markdown file (or stdin) to an HTML fragment on stdout
    Render {
        /// Markdown file; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Directory of Markdown content
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory of static assets
    #[arg(long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// Page template
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory (emptied first)
    #[arg(short, long, default_value = "public")]
    output: PathBuf,
}

impl From<BuildArgs> for SiteConfig {
    fn from(args: BuildArgs) -> Self {
        Self {
            content_dir: args.content,
            static_dir: args.static_dir,
            template_path: args.template,
            output_dir: args.output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build(args) => {
            let config = SiteConfig::from(args);
            let report = build_site(&config).context("site build failed")?;
            log::info!("done: {} page(s)", report.pages.len());
        }
        Command::Render { file } => {
            let input = match file {
                Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                _ => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let html = mdpages::to_html(&input)?;
            io::stdout().write_all(html.as_bytes())?;
        }
    }

    Ok(())
}
