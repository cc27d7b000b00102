//! Falagard CLI - inspect look-and-feel definitions without a renderer.
//!
//! Usage:
//!   falagard looks skins/                          # List looks found under skins/
//!   falagard dump Vanilla/FrameWindow              # Outline one look
//!   falagard render Vanilla/FrameWindow -s Active  # Print a state's render cache
//!   falagard area Vanilla/FrameWindow ClientArea   # Resolve one named area
//!   falagard layout Vanilla/FrameWindow            # Lay out auto-generated children

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use falagard::dump::{describe_look, describe_rect, describe_render_cache, describe_window};
use falagard::render::{Rect, RenderCache, Size};
use falagard::widget::{Window, WindowManager, WindowRegistry};
use falagard::{EngineConfig, WidgetLookManager};

#[derive(Parser)]
#[command(name = "falagard")]
#[command(about = "Inspect Falagard look-and-feel definitions")]
struct Cli {
    /// Look-and-feel file or directory to load (repeatable; defaults to the configured search paths)
    #[arg(short, long = "path", global = true)]
    paths: Vec<PathBuf>,

    /// Config file (defaults to the per-user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every loaded widget look
    Looks {
        /// Additional files or directories
        extra: Vec<PathBuf>,
    },

    /// Print a look's properties, areas, sections, states and children
    Dump { look: String },

    /// Print the render cache of one state
    Render {
        look: String,

        #[arg(short, long, default_value = "Enabled")]
        state: String,

        /// Widget size
        #[arg(long, default_value = "200x100", value_parser = parse_size)]
        size: Size,

        /// Widget property, as NAME=VALUE (repeatable)
        #[arg(long = "property", value_name = "NAME=VALUE")]
        properties: Vec<String>,
    },

    /// Resolve one named area against a widget of the given size
    Area {
        look: String,
        area: String,

        #[arg(long, default_value = "200x100", value_parser = parse_size)]
        size: Size,
    },

    /// Create the look's child widgets and print their laid-out rects
    Layout {
        look: String,

        #[arg(long, default_value = "200x100", value_parser = parse_size)]
        size: Size,
    },
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s.split_once('x').ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w: f32 = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h: f32 = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    Ok(Size::new(w, h))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load_from(path)?,
        None => EngineConfig::load(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut paths = if cli.paths.is_empty() { config.search_paths.clone() } else { cli.paths.clone() };
    if let Commands::Looks { extra } = &cli.command {
        paths.extend(extra.iter().cloned());
    }
    let looks = load_looks(&config, &paths)?;

    match cli.command {
        Commands::Looks { .. } => {
            for name in looks.widget_look_names() {
                println!("{name}");
            }
        }
        Commands::Dump { look } => {
            print!("{}", describe_look(&*looks.get_widget_look(&look)?));
        }
        Commands::Render { look, state, size, properties } => {
            render_state(&looks, &look, &state, size, &properties)?;
        }
        Commands::Area { look, area, size } => {
            let widget_look = looks.get_widget_look(&look)?;
            let window = preview_window(&looks, &look, size)?;
            match widget_look.resolve_named_area(&area, &window) {
                Some(rect) => println!("{area}: {}", describe_rect(rect)),
                None => return Err(falagard::Error::not_found(falagard::error::ObjectKind::NamedArea, area).into()),
            }
        }
        Commands::Layout { look, size } => {
            layout_children(&looks, &look, size)?;
        }
    }
    Ok(())
}

fn load_looks(config: &EngineConfig, paths: &[PathBuf]) -> falagard::Result<WidgetLookManager> {
    let mut looks = WidgetLookManager::with_policy(config.unload_policy);
    for path in paths {
        if !path.exists() {
            tracing::warn!("look-and-feel path {} does not exist", path.display());
            continue;
        }
        let loaded = looks.load_path(path)?;
        tracing::info!("loaded {} looks from {}", loaded.len(), path.display());
    }
    Ok(looks)
}

/// A top-level window of `size` using `look`, initialised from the look's properties.
fn preview_window(looks: &WidgetLookManager, look: &str, size: Size) -> falagard::Result<Window> {
    let widget_look = looks.get_widget_look(look)?;
    let mut window = Window::new("Preview", "Preview").with_look(look).with_area(Rect::new(0.0, 0.0, size.width, size.height));
    widget_look.initialise_widget(&mut window);
    Ok(window)
}

fn render_state(
    looks: &WidgetLookManager,
    look: &str,
    state: &str,
    size: Size,
    properties: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut window = preview_window(looks, look, size)?;
    for prop in properties {
        let (name, value) = prop.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got {prop:?}"))?;
        window.set_property(name, value);
    }

    let mut cache = RenderCache::new();
    if !looks.get_widget_look(look)?.render(state, &window, &mut cache) {
        return Err(falagard::Error::not_found(falagard::error::ObjectKind::StateImagery, state).into());
    }
    print!("{}", describe_render_cache(&cache));
    let batch = cache.to_quad_batch();
    println!(
        "{} primitives, {} quads, {} texture requests",
        cache.len(),
        batch.quad_count(),
        batch.texture_requests.len()
    );
    Ok(())
}

fn layout_children(looks: &WidgetLookManager, look: &str, size: Size) -> falagard::Result<()> {
    let widget_look = looks.get_widget_look(look)?;
    let mut window = preview_window(looks, look, size)?;
    let mut windows = WindowRegistry::new();
    widget_look.create_child_widgets(&mut window, &mut windows)?;
    widget_look.layout_child_widgets(&window, &mut windows);

    print!("{}", describe_window(&window));
    if window.children.is_empty() {
        println!("{look} defines no child widgets");
    }
    for name in &window.children {
        if let Some(child) = windows.get_window(name) {
            print!("{}", describe_window(child));
        }
    }
    Ok(())
}
