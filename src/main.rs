//! DrillPad - A desktop client for a coding-exercise platform
//!
//! Launches the GUI: exercise selector and Run button on top, code
//! editor in the middle, assistant chat on the right, test output at
//! the bottom.

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info, warn};

use drillpad::config::Config;
use drillpad::error::Result;
use drillpad::DrillPadApp;

use eframe::egui;

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Server base URL override
    server: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    if i + 1 < args.len() {
                        app_args.width = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--height" | "-h" => {
                    if i + 1 < args.len() {
                        app_args.height = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--server" | "-s" => {
                    if i + 1 < args.len() {
                        app_args.server = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing server URL".into());
                    }
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("DrillPad v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    warn!("Ignoring positional argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("DrillPad - A desktop client for a coding-exercise platform");
    println!();
    println!("USAGE:");
    println!("    drillpad [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -s, --server <URL>     Exercise platform base URL");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    DrillPad looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. DRILLPAD_CONFIG environment variable");
    println!("    3. $XDG_CONFIG_HOME/drillpad/config.toml");
    println!("    4. ~/.drillpad/config.toml");
    println!("    5. ./drillpad.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    DRILLPAD_CONFIG        Path to configuration file");
    println!("    DRILLPAD_DEBUG         Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug
        || env::var("DRILLPAD_DEBUG").map_or(false, |v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Starting DrillPad v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration and apply command-line overrides
    let mut config = Config::load(args.config_path.as_deref());
    if let Some(server) = &args.server {
        debug!("Applying server override: {}", server);
        config.server.base_url = server.clone();
        if let Err(e) = config.validate() {
            error!("Invalid server override: {}", e);
            process::exit(1);
        }
    }

    let dark_theme = config.ui.theme != "light";
    let native_options = create_native_options(&args, &config);

    let app = DrillPadApp::new(config).unwrap_or_else(|e| {
        error!("Failed to create application: {}", e);
        process::exit(1);
    });

    info!("Initializing GUI...");
    if let Err(e) = eframe::run_native(
        "DrillPad",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_theme {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(app))
        }),
    ) {
        error!("Application failed: {}", e);
        process::exit(1);
    }

    info!("DrillPad shutdown complete");
    Ok(())
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, config: &drillpad::Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width);
    let height = args.height.unwrap_or(config.ui.window_height);

    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("DrillPad")
            .with_app_id("drillpad")
            .with_icon(std::sync::Arc::new(load_or_create_window_icon()))
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };
    options.renderer = eframe::Renderer::Glow;
    options
}

/// Create window icon
fn create_window_icon() -> egui::IconData {
    // A 32x32 editor-inspired icon: dark panel with code-like dashes
    let mut rgba = Vec::with_capacity(32 * 32 * 4);

    let bg_color = [30, 34, 42, 255]; // Dark background
    let code_color = [120, 200, 255, 255]; // Code lines
    let accent_color = [100, 220, 120, 255]; // Run-button green

    for y in 0..32 {
        for x in 0..32 {
            let pixel = if (4..28).contains(&x) && (4..28).contains(&y) {
                if y % 5 == 1 && x >= 7 && x < 7 + ((y * 3) % 16) {
                    // Staggered "code lines"
                    code_color
                } else if (22..26).contains(&x) && (22..26).contains(&y) {
                    accent_color
                } else {
                    bg_color
                }
            } else {
                bg_color
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}

/// Try loading `icon.png` from the working directory; fall back to the
/// generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let path = std::path::Path::new("icon.png");
    if path.exists() {
        if let Ok(img) = image::open(path) {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            return egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            };
        }
    }
    create_window_icon()
}
