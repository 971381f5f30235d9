use clap::{Parser, Subcommand};
use simple_og::compose::Composer;
use simple_og::config::{self, ConfigError, RenderConfig};
use simple_og::output;
use simple_og::types::ArticleInfo;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-og")]
#[command(about = "Open Graph preview image generator for articles")]
#[command(long_about = "\
Open Graph preview image generator for articles

Renders 1200x630 preview rasters: background frame, darkened logo
watermark, circular bordered avatar, and the article's title, wrapped
description, author and URL.

The avatar and logo are shared across a batch; each article gets its own
clone of the composed template before text is drawn.

Batch manifest format (JSON array, one record per output image):

  [
    {
      \"title\": \"Hello World\",
      \"description\": \"A short description that wraps\",
      \"author\": \"Jane Doe\",
      \"url\": \"example.com/article\",
      \"output_path\": \"out/hello.png\"
    }
  ]

Fonts are resolved from the configured font directory (default fonts/)
at startup; a missing font file aborts before any rendering.

Run 'simple-og gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Optional config.toml overriding the stock layout constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a single article preview
    Render(RenderArgs),
    /// Render every article in a JSON manifest, sharing one avatar and logo
    Batch(BatchArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Title text
    #[arg(long)]
    title: String,

    /// Description text (empty string skips the description block)
    #[arg(long)]
    description: String,

    /// Author name
    #[arg(long)]
    author: String,

    /// Article URL
    #[arg(long)]
    url: String,

    /// Path to the author avatar image
    #[arg(long)]
    avatar: PathBuf,

    /// Path to the logo image
    #[arg(long)]
    logo: PathBuf,

    /// Path to the output file (format implied by extension)
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// JSON manifest: an array of article records
    #[arg(long)]
    manifest: PathBuf,

    /// Path to the author avatar image, shared by all records
    #[arg(long)]
    avatar: PathBuf,

    /// Path to the logo image, shared by all records
    #[arg(long)]
    logo: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, ConfigError> {
    match path {
        Some(path) => RenderConfig::load(path),
        None => Ok(RenderConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => {
            let config = load_config(cli.config.as_deref())?;
            let composer = Composer::new(config, &args.avatar, &args.logo)?;
            let article = ArticleInfo {
                title: args.title,
                description: args.description,
                author: args.author,
                url: args.url,
                output_path: args.output,
            };
            let rendered = composer.render(&article)?;
            output::print_render_report(1, &article, &rendered);
        }
        Command::Batch(args) => {
            let config = load_config(cli.config.as_deref())?;
            let manifest = std::fs::read_to_string(&args.manifest)?;
            let articles: Vec<ArticleInfo> = serde_json::from_str(&manifest)?;
            let composer = Composer::new(config, &args.avatar, &args.logo)?;
            for (i, article) in articles.iter().enumerate() {
                let rendered = composer.render(article)?;
                output::print_render_report(i + 1, article, &rendered);
            }
            println!("{}", output::format_batch_summary(articles.len()));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
