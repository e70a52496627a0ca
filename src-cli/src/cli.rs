use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use grid_model::{Template, WidgetType};
use store::{EditorSettings, SettingsManager};

use crate::replay::{load_script, Replay};

#[derive(Debug, Parser)]
#[command(
    name = "grid-replay",
    about = "Replay pointer input scripts against a grid page layout",
    version
)]
pub struct Cli {
    /// Directory holding settings.json
    #[arg(long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a script of canvas inputs and print the emitted events.
    Replay(ReplayArgs),

    /// Check a layout file against the grid invariants.
    Validate(ValidateArgs),

    /// Print built-in template names.
    Templates,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// JSON array of canvas inputs.
    #[arg(long)]
    pub script: PathBuf,

    /// Layout file to start from.
    #[arg(long, conflicts_with = "template")]
    pub layout: Option<PathBuf>,

    /// Built-in template to start from (defaults to the configured one).
    #[arg(long)]
    pub template: Option<String>,

    /// Container width in pixels, applied before the script runs.
    #[arg(long)]
    pub width: Option<f64>,

    /// Open the canvas in read-only (public page) mode.
    #[arg(long = "read-only")]
    pub read_only: bool,

    /// Answer every add request with a widget of this type.
    #[arg(long = "auto-add", value_parser = parse_widget_type)]
    pub auto_add: Option<WidgetType>,

    /// Write the final layout here.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the final render model after the events.
    #[arg(long)]
    pub view: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Layout file to check.
    pub path: PathBuf,
}

fn parse_widget_type(value: &str) -> std::result::Result<WidgetType, String> {
    WidgetType::ADDABLE
        .into_iter()
        .find(|ty| ty.label().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown widget type `{value}`"))
}

pub async fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}

pub async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config_dir).await?;
    match cli.command {
        Commands::Replay(args) => run_replay(args, &settings).await,
        Commands::Validate(args) => run_validate(args).await,
        Commands::Templates => {
            for template in Template::ALL {
                let marker = if template == settings.general.default_template {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{}", template.name(), marker);
            }
            Ok(())
        }
    }
}

async fn load_settings(config_dir: Option<PathBuf>) -> Result<EditorSettings> {
    let Some(dir) = config_dir else {
        return Ok(EditorSettings::default());
    };
    let mut manager = SettingsManager::new(dir);
    let path = manager.settings_path().clone();
    let settings = manager
        .load()
        .await
        .with_context(|| format!("loading {}", path.display()))?
        .clone();
    tracing::info!("Loaded settings from {:?}", path);
    Ok(settings)
}

async fn run_replay(args: ReplayArgs, settings: &EditorSettings) -> Result<()> {
    let layout = match (&args.layout, &args.template) {
        (Some(path), _) => store::load_layout(path)
            .await
            .with_context(|| format!("loading layout {}", path.display()))?,
        (None, Some(name)) => {
            let Some(template) = Template::from_name(name) else {
                bail!("unknown template `{name}`");
            };
            template.build(settings.grid.default_rows, settings.grid.default_cols)
        }
        (None, None) => settings
            .general
            .default_template
            .build(settings.grid.default_rows, settings.grid.default_cols),
    };

    let script = load_script(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;

    let mut replay = Replay::new(layout, settings.grid, args.read_only, args.width);
    if let Some(widget_type) = args.auto_add {
        replay = replay.auto_add(widget_type);
    }

    for record in replay.run(script) {
        println!("{}", serde_json::to_string(&record)?);
    }

    if args.view {
        println!("{}", serde_json::to_string_pretty(&replay.canvas().view())?);
    }

    if let Some(out) = &args.out {
        store::save_layout(replay.canvas().layout(), out)
            .await
            .with_context(|| format!("writing {}", out.display()))?;
    }
    Ok(())
}

async fn run_validate(args: ValidateArgs) -> Result<()> {
    let layout = store::load_layout(&args.path)
        .await
        .with_context(|| format!("validating {}", args.path.display()))?;
    println!(
        "{}: {}x{} grid, {} items, ok",
        args.path.display(),
        layout.rows,
        layout.cols,
        layout.items.len()
    );
    Ok(())
}
