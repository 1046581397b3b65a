use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use brandcolor::api;
use brandcolor::assets::{AssetCategory, AssetLoader};
use brandcolor::models::load_catalog;
use brandcolor::server;
use oklch_match::catalog::{DEFAULT_SHADE, SHADE_COUNT};
use oklch_match::color::{adjust_oklch, hex_to_rgb, Oklch};
use oklch_match::matcher::{closest_match, find_closest_shade};
use oklch_match::mood::{preview_moods, transform_for_variant};
use oklch_match::{MoodProfile, MoodTarget, PaletteCatalog, Variant};

#[derive(Parser)]
#[command(name = "brandcolor")]
#[command(about = "Brand color service - perceptual palette matching, moods and themes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert a hex color to OKLCH
    Oklch {
        /// Color as #rrggbb or rrggbb
        hex: String,
    },
    /// Find the closest palette for a color
    Match {
        /// Color as #rrggbb or rrggbb
        hex: String,

        /// Match against the dark scales
        #[arg(long)]
        dark: bool,

        /// Shade to report for the palette match
        #[arg(long, default_value_t = DEFAULT_SHADE)]
        shade: u8,

        /// Search every shade instead of scoring whole palettes
        #[arg(long)]
        full: bool,
    },
    /// Transform a color by mood
    Mood {
        /// Color as #rrggbb or rrggbb
        hex: String,

        /// Archetype name (e.g. caregiver, sage, outlaw)
        #[arg(required_unless_present_all = ["chroma", "lightness"])]
        mood: Option<String>,

        /// Target chroma, overrides the mood
        #[arg(long)]
        chroma: Option<f64>,

        /// Target lightness, overrides the mood
        #[arg(long)]
        lightness: Option<f64>,

        /// Match against the dark scales
        #[arg(long)]
        dark: bool,
    },
    /// List archetypes, or preview all of them for a color
    Moods {
        /// Color to preview
        hex: Option<String>,

        /// Match against the dark scales
        #[arg(long)]
        dark: bool,
    },
    /// Print a palette's scale
    Palette {
        /// Palette name (e.g. indigo)
        name: String,

        /// Print the dark scale
        #[arg(long)]
        dark: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract catalog.yaml
        #[arg(long)]
        catalog: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,

        /// Target directory when CATALOG_FILE / CONFIG_FILE are not set
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brandcolor API",
        description = "Perceptual palette matching, brand moods and themes",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_oklch,
        api::handle_match,
        api::handle_match_shade,
        api::handle_quick_pick,
        api::handle_moods,
        api::handle_mood,
        api::handle_mood_preview,
        api::handle_theme,
        api::handle_palettes,
        api::handle_palette,
        api::handle_gray_pair,
    ),
    components(schemas(
        api::OklchResponse,
        api::OklchValue,
        api::RgbValue,
        api::MatchResponse,
        api::QuickPickResponse,
        api::MoodInfo,
        api::MoodResponse,
        api::MoodPreviewResponse,
        api::ThemeResponse,
        api::PaletteSummary,
        api::PaletteDetail,
        api::GrayPairResponse,
    )),
    tags(
        (name = "Color", description = "Color conversion and palette matching"),
        (name = "Mood", description = "Brand archetype transforms"),
        (name = "Theme", description = "Accent and neutral resolution"),
        (name = "Palette", description = "Catalog browsing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Oklch { hex }) => run_oklch_command(&hex),
        Some(Commands::Match {
            hex,
            dark,
            shade,
            full,
        }) => run_match_command(&hex, Variant::from_dark_flag(dark), shade, full),
        Some(Commands::Mood {
            hex,
            mood,
            chroma,
            lightness,
            dark,
        }) => run_mood_command(
            &hex,
            mood.as_deref(),
            chroma,
            lightness,
            Variant::from_dark_flag(dark),
        ),
        Some(Commands::Moods { hex, dark }) => {
            run_moods_command(hex.as_deref(), Variant::from_dark_flag(dark))
        }
        Some(Commands::Palette { name, dark }) => {
            run_palette_command(&name, Variant::from_dark_flag(dark))
        }
        Some(Commands::Init {
            catalog,
            config,
            all,
            force,
            list,
            dir,
        }) => run_init_command(catalog, config, all, force, list, &dir),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandcolor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Load the catalog for one-shot commands
fn cli_catalog() -> anyhow::Result<PaletteCatalog> {
    init_cli_logging();
    let loader = AssetLoader::from_env();
    load_catalog(&loader).map_err(|e| anyhow::anyhow!("Failed to load palette catalog: {e}"))
}

fn parse_color(hex: &str) -> anyhow::Result<Oklch> {
    hex_to_rgb(hex)
        .map(Oklch::from)
        .ok_or_else(|| anyhow::anyhow!("Invalid hex color: {hex}"))
}

fn run_oklch_command(hex: &str) -> anyhow::Result<()> {
    let rgb = hex_to_rgb(hex).ok_or_else(|| anyhow::anyhow!("Invalid hex color: {hex}"))?;
    let oklch = Oklch::from(rgb);

    println!("{}", rgb.to_hex());
    println!("  rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("  {oklch}");
    Ok(())
}

fn run_match_command(hex: &str, variant: Variant, shade: u8, full: bool) -> anyhow::Result<()> {
    if !(1..=SHADE_COUNT).contains(&shade) {
        anyhow::bail!("Shade must be between 1 and {SHADE_COUNT}, got {shade}");
    }
    let catalog = cli_catalog()?;
    let target = parse_color(hex)?;

    let result = if full {
        find_closest_shade(&catalog, target, variant)
    } else {
        closest_match(&catalog, target, variant, shade)
    };
    let display = catalog.shade_hex(&result.palette_name, result.shade, variant);

    println!("{result}  {display}  ({variant})");
    println!("  gray pair: {}", catalog.get_gray_pair(&result.palette_name));
    Ok(())
}

fn run_mood_command(
    hex: &str,
    mood: Option<&str>,
    chroma: Option<f64>,
    lightness: Option<f64>,
    variant: Variant,
) -> anyhow::Result<()> {
    let base = match mood {
        Some(name) => name
            .parse::<MoodProfile>()
            .map(MoodProfile::target)
            .map_err(|e| anyhow::anyhow!(e))?,
        None => MoodTarget::FALLBACK,
    };
    let target = MoodTarget::new(
        chroma.unwrap_or(base.chroma),
        lightness.unwrap_or(base.lightness),
    );
    if !target.chroma.is_finite() || !target.lightness.is_finite() {
        anyhow::bail!("Chroma and lightness must be finite numbers");
    }

    let catalog = cli_catalog()?;
    let base = parse_color(hex)?;
    let result = transform_for_variant(&catalog, hex, target.chroma, target.lightness, variant);
    let display = catalog.shade_hex(&result.palette_name, result.shade, variant);

    println!("{result}  {display}  ({variant})");
    println!(
        "  target: {}",
        adjust_oklch(base, target.chroma, target.lightness)
    );
    Ok(())
}

fn run_moods_command(hex: Option<&str>, variant: Variant) -> anyhow::Result<()> {
    let Some(hex) = hex else {
        println!("Archetypes:\n");
        for mood in MoodProfile::ALL {
            let target = mood.target();
            println!(
                "  {:<10} chroma {:.2}  lightness {:.2}",
                mood.name(),
                target.chroma,
                target.lightness
            );
        }
        return Ok(());
    };

    let catalog = cli_catalog()?;
    parse_color(hex)?;

    println!("Moods for {hex} ({variant}):\n");
    for preview in preview_moods(&catalog, hex, variant) {
        let shade = preview.result.to_string();
        println!("  {:<10} {shade:<12} {}", preview.mood.name(), preview.hex);
    }
    Ok(())
}

fn run_palette_command(name: &str, variant: Variant) -> anyhow::Result<()> {
    let catalog = cli_catalog()?;
    let scale = catalog
        .color_scale(name, variant)
        .ok_or_else(|| anyhow::anyhow!("Unknown palette: {name}"))?;

    println!("{name} ({variant}), gray pair {}:\n", catalog.get_gray_pair(name));
    for (shade, hex) in scale {
        println!("  {shade:>2}  {hex}");
    }
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    catalog: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
    dir: &std::path::Path,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Catalog:");
        for f in AssetLoader::list_embedded(AssetCategory::Catalog) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || catalog {
        categories.push(AssetCategory::Catalog);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --catalog, or --config");
        eprintln!("\nRun 'brandcolor init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, dir, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let catalog_file = std::env::var("CATALOG_FILE").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Brandcolor v{VERSION}");
    println!("Perceptual palette matching, brand moods and themes\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CATALOG_FILE = {}",
        catalog_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    println!("\nAsset Sources:");
    println!("  Catalog: {}", loader.source(AssetCategory::Catalog));
    println!("  Config:  {}", loader.source(AssetCategory::Config));

    match load_catalog(&loader) {
        Ok(catalog) => println!(
            "  Palettes: {} ({} matchable)",
            catalog.len(),
            catalog.base_palettes().count()
        ),
        Err(e) => println!("  Palettes: failed to load ({e})"),
    }

    println!("\nCommands:");
    println!("  brandcolor serve     Start the HTTP server");
    println!("  brandcolor oklch     Convert a hex color to OKLCH");
    println!("  brandcolor match     Find the closest palette");
    println!("  brandcolor mood      Transform a color by mood");
    println!("  brandcolor moods     List or preview archetypes");
    println!("  brandcolor palette   Print a palette scale");
    println!("  brandcolor init      Extract embedded assets");
    println!("\nRun 'brandcolor --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandcolor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        catalog = %asset_loader.source(AssetCategory::Catalog),
        config = %asset_loader.source(AssetCategory::Config),
        "Asset sources configured"
    );

    // Seed if configured paths are missing
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                catalog = report.catalog_seeded,
                config = report.config_seeded,
                "Seeded missing files with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Brandcolor server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
