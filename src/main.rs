use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::path::{Path, PathBuf};

use fingerpaint::config::Config;
use fingerpaint::export::{self, ExportDependencies, file::FileSaveConfig};
use fingerpaint::input::{CanvasEvent, CanvasState, ToolState};
use fingerpaint::session;

#[derive(Parser, Debug)]
#[command(name = "fingerpaint")]
#[command(version, about = "Touch drawing canvas engine for mobile paint apps")]
struct Cli {
    /// Replay a recorded gesture trace (JSON event list)
    #[arg(long, short = 't', value_name = "FILE")]
    trace: Option<PathBuf>,

    /// Write the rendered canvas as SVG ("-" for stdout)
    #[arg(long, short = 'r', value_name = "FILE")]
    render: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1080.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1920.0)]
    height: f64,

    /// Re-render the canvas through the configured style-transfer service
    #[arg(long, value_name = "STYLE")]
    stylize: Option<String>,

    /// Export the canvas to the gallery directory
    #[arg(long, action = ArgAction::SetTrue)]
    save: bool,

    /// Hand the exported file to the configured share command
    #[arg(long, action = ArgAction::SetTrue)]
    share: bool,

    /// Restore the persisted session before replaying
    #[arg(long, action = ArgAction::SetTrue)]
    restore: bool,

    /// Persist the session when done
    #[arg(long, action = ArgAction::SetTrue)]
    persist: bool,

    /// Print information about the persisted session and exit
    #[arg(long, action = ArgAction::SetTrue)]
    session_info: bool,

    /// Delete the persisted session files and exit
    #[arg(long, action = ArgAction::SetTrue)]
    clear_session: bool,
}

impl Cli {
    fn has_action(&self) -> bool {
        self.trace.is_some()
            || self.render.is_some()
            || self.stylize.is_some()
            || self.save
            || self.share
            || self.restore
            || self.persist
            || self.session_info
            || self.clear_session
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.has_action() {
        // No flags: show usage
        println!("fingerpaint: Touch drawing canvas engine for mobile paint apps");
        println!();
        println!("Usage:");
        println!("  fingerpaint --trace FILE --render out.svg   Replay a gesture trace and render it");
        println!("  fingerpaint --trace FILE --save             Replay and export to the gallery directory");
        println!("  fingerpaint --trace FILE --stylize STYLE    Replay and re-render via the style service");
        println!("  fingerpaint --restore --render -            Render the persisted session to stdout");
        println!("  fingerpaint --session-info                  Show persisted session details");
        println!("  fingerpaint --help                          Show all options");
        println!();
        println!("Traces are JSON event lists, e.g.:");
        println!("  [{{\"event\": \"touch_start\", \"x\": 10, \"y\": 10}},");
        println!("   {{\"event\": \"touch_move\", \"x\": 80, \"y\": 40}},");
        println!("   {{\"event\": \"touch_end\"}}]");
        return Ok(());
    }

    let config = Config::load()?;
    let config_dir = Config::get_config_path()?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let session_options = session::options_from_config(&config.session, &config_dir)?;

    if cli.session_info {
        return print_session_info(&session_options);
    }

    if cli.clear_session {
        let outcome = session::clear_session(&session_options)?;
        if outcome.removed_session {
            println!("Removed {}", session_options.session_file_path().display());
        } else {
            println!("No persisted session found");
        }
        return Ok(());
    }

    let mut canvas = build_canvas(&config);

    if cli.restore {
        match session::load_snapshot(&session_options)? {
            Some(snapshot) => {
                session::apply_snapshot(&mut canvas, snapshot, &session_options);
                log::info!(
                    "Restored session: {} strokes, {} shapes",
                    canvas.scene.strokes.len(),
                    canvas.scene.shapes.len()
                );
            }
            None => log::info!("No persisted session to restore"),
        }
    }

    if let Some(trace_path) = &cli.trace {
        let events = read_trace(trace_path)?;
        log::info!("Replaying {} events from {}", events.len(), trace_path.display());
        for event in &events {
            canvas.apply(event);
        }
        log::info!(
            "Scene now holds {} strokes and {} shapes",
            canvas.scene.strokes.len(),
            canvas.scene.shapes.len()
        );
    }

    let svg = canvas.render_svg(cli.width, cli.height);

    if let Some(render_path) = &cli.render {
        if render_path.as_os_str() == "-" {
            print!("{svg}");
        } else {
            fs::write(render_path, &svg)
                .with_context(|| format!("Failed to write SVG to {}", render_path.display()))?;
            log::info!("Rendered canvas to {}", render_path.display());
        }
    }

    if cli.save || cli.share || cli.stylize.is_some() {
        run_export_flow(&cli, &config, svg.into_bytes())?;
    }

    if cli.persist {
        match session::snapshot_from_canvas(&canvas, &session_options) {
            Some(snapshot) => session::save_snapshot(&snapshot, &session_options)?,
            None => log::info!("Nothing to persist"),
        }
    }

    Ok(())
}

fn build_canvas(config: &Config) -> CanvasState {
    let tools = ToolState::with_defaults(
        config.drawing.default_color.to_color(),
        config.drawing.default_brush_size,
        config.drawing.recent_sizes.clone(),
    );
    CanvasState::with_defaults(
        tools,
        config.canvas.background_color.to_color(),
        config.canvas.min_background_scale,
    )
}

fn read_trace(path: &Path) -> Result<Vec<CanvasEvent>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trace file {}", path.display()))
}

fn run_export_flow(cli: &Cli, config: &Config, snapshot: Vec<u8>) -> Result<()> {
    let style = cli.stylize.clone();

    if let Some(style_id) = &style {
        let known = config
            .style_transfer
            .styles
            .iter()
            .any(|preset| preset.id == *style_id);
        if !known {
            log::warn!(
                "Style '{}' is not among the configured presets; sending it anyway",
                style_id
            );
        }
    }

    // Stylized results come back as raster data, not SVG
    let format_override = style.is_some().then_some("png");
    let save_config = FileSaveConfig::from_config(&config.export, format_override);
    let dependencies = ExportDependencies::from_config(&config.style_transfer, &config.export)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let result = runtime.block_on(export::run_export(
        snapshot,
        style,
        save_config,
        cli.share,
        dependencies,
    ))?;

    println!("Saved {}", result.saved_path.display());
    if result.styled {
        log::info!("Canvas was re-rendered by the style service");
    }
    if cli.share && !result.shared {
        log::warn!("Share hand-off did not complete");
    }

    Ok(())
}

fn print_session_info(options: &session::SessionOptions) -> Result<()> {
    let inspection = session::inspect_session(options)?;

    println!("Session file: {}", inspection.session_path.display());
    if !inspection.exists {
        println!("  (none)");
        return Ok(());
    }

    if let Some(size) = inspection.size_bytes {
        println!("  size: {} bytes (compressed: {})", size, inspection.compressed);
    }
    if let Some(counts) = inspection.entity_counts {
        println!(
            "  scene: {} strokes, {} shapes, background: {}",
            counts.strokes,
            counts.shapes,
            if counts.has_background { "yes" } else { "no" }
        );
    }
    println!("  tool state saved: {}", inspection.tool_state_present);
    if inspection.backup_exists {
        println!("  backup: {}", inspection.backup_path.display());
    }

    Ok(())
}
