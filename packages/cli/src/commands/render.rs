use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use colored::Colorize;
use pegboard_model::Page;
use pegboard_renderer::{render as render_page, write_html, RenderOptions, Viewport, WriteOptions};
use pegboard_renderer::{EditorState, RenderMode};
use pegboard_store::SiteConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page document (JSON)
    pub page: PathBuf,

    /// Render mode (edit, view)
    #[arg(short, long, default_value = "view")]
    pub mode: String,

    /// Render with the narrow-viewport override
    #[arg(long)]
    pub narrow: bool,

    /// Site configuration document (JSON); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit compact HTML instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.page)
        .with_context(|| format!("cannot read page document {:?}", args.page))?;
    let page: Page = serde_json::from_str(&raw)
        .with_context(|| format!("malformed page document {:?}", args.page))?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read configuration {path:?}"))?;
            serde_json::from_str::<SiteConfig>(&raw)
                .with_context(|| format!("malformed configuration {path:?}"))?
        }
        None => SiteConfig::default(),
    };

    let viewport = if args.narrow {
        Viewport::Narrow
    } else {
        Viewport::Wide
    };
    let options = match args.mode.as_str() {
        "view" => RenderOptions::view(config, viewport),
        "edit" => RenderOptions::edit(config, viewport, EditorState::new()),
        other => return Err(anyhow!("unknown mode: {other}. Use: edit or view")),
    };

    let document = render_page(&page.nodes, &options);
    let html = write_html(
        &document,
        &WriteOptions {
            pretty: !args.compact,
            title: if page.name.is_empty() {
                "Pegboard Page".to_string()
            } else {
                page.name.clone()
            },
            ..WriteOptions::default()
        },
    );

    match &args.out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("cannot write output {path:?}"))?;
            let mode = if options.mode == RenderMode::Edit {
                "edit"
            } else {
                "view"
            };
            println!(
                "  {} {} → {} ({} mode)",
                "✓".green(),
                args.page.display(),
                path.display(),
                mode
            );
        }
        None => println!("{html}"),
    }

    Ok(())
}
