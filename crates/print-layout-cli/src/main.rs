use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use print_layout::{
    GeoSize, GeodesicSizeProvider, GeographicProvider, LayoutRequest, LayoutTemplate,
    LayoutValidator, MapExtent, PaperFormat, ProjectedProvider, StandardPaperSizes, Validation,
    accept_validated,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plt", about = "Print layout calculator", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a layout and show how many pages it needs
    Validate {
        /// Load the layout request from a JSON file; other flags override it
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Map extent as min_x,min_y,max_x,max_y
        #[arg(short, long, allow_hyphen_values = true)]
        extent: Option<MapExtent>,

        /// Map scale (ground units per canvas unit)
        #[arg(short, long)]
        scale: Option<f64>,

        /// Paper format name
        #[arg(short, long)]
        paper: Option<String>,

        /// Paper orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Use an existing layout template instead of a new layout
        #[arg(long)]
        template: Option<PathBuf>,

        /// Coordinate system of the extent
        #[arg(long, default_value = "projected", value_enum)]
        crs: CrsArg,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the scale that fits an extent on a 7 by 7 inch canvas
    Fit {
        /// Map extent as min_x,min_y,max_x,max_y
        #[arg(short, long, allow_hyphen_values = true)]
        extent: MapExtent,

        /// Coordinate system of the extent
        #[arg(long, default_value = "projected", value_enum)]
        crs: CrsArg,
    },

    /// List the built-in paper formats
    Papers,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum CrsArg {
    /// Projected coordinates in meters
    Projected,
    /// Projected coordinates in international feet
    Feet,
    /// Longitude/latitude in degrees
    Geographic,
}

impl From<OrientationArg> for print_layout::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

enum Provider {
    Projected(ProjectedProvider),
    Geographic(GeographicProvider),
}

impl From<CrsArg> for Provider {
    fn from(arg: CrsArg) -> Self {
        match arg {
            CrsArg::Projected => Provider::Projected(ProjectedProvider::default()),
            CrsArg::Feet => Provider::Projected(ProjectedProvider::new(0.3048)),
            CrsArg::Geographic => Provider::Geographic(GeographicProvider::default()),
        }
    }
}

impl GeodesicSizeProvider for Provider {
    fn geodesic_size(&self, extent: &MapExtent) -> Option<GeoSize> {
        match self {
            Provider::Projected(p) => p.geodesic_size(extent),
            Provider::Geographic(p) => p.geodesic_size(extent),
        }
    }
}

fn template_from_path(path: &Path) -> LayoutTemplate {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    LayoutTemplate::new(name, path.to_string_lossy())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            request,
            extent,
            scale,
            paper,
            orientation,
            template,
            crs,
            json,
        } => {
            let mut request = match request {
                Some(path) => LayoutRequest::load(&path).await?,
                None => LayoutRequest::default(),
            };
            if let Some(extent) = extent {
                request.extent = extent;
            }
            if let Some(scale) = scale {
                request.scale = scale;
            }
            if let Some(paper) = paper {
                request.paper_format = paper;
            }
            if let Some(orientation) = orientation {
                request.orientation = orientation.into();
            }
            if let Some(path) = template {
                request.new_layout = false;
                request.template = Some(template_from_path(&path));
            }
            request.validate()?;

            let validator = LayoutValidator::new(Provider::from(crs), StandardPaperSizes);
            let validation = validator.validate(&request);

            if json {
                let output = match validation {
                    Validation::Layout(result) => serde_json::to_string_pretty(&result)?,
                    Validation::Template { selected } => {
                        serde_json::to_string_pretty(&serde_json::json!({ "selected": selected }))?
                    }
                    Validation::UnresolvedGeometry | Validation::InvalidScale(_) => {
                        serde_json::to_string_pretty(&serde_json::json!({ "is_valid": false }))?
                    }
                };
                println!("{}", output);
            } else {
                print_validation(&validation, &request);
            }

            let accepted = accept_validated(&request, &validation)?;
            log::info!("Accepted layout: {:?}", accepted.settings());
        }

        Commands::Fit { extent, crs } => {
            let validator = LayoutValidator::new(Provider::from(crs), StandardPaperSizes);
            let scale = validator.fit_to_page(&extent)?;
            println!("Fit to page scale: {} ({})", scale.rounded(), scale);
        }

        Commands::Papers => {
            for format in PaperFormat::ALL {
                let size = format.paper_size();
                let (w, h) = format.dimensions_mm();
                println!(
                    "  {:<8} {:>6.1} x {:>6.1} mm  ({} x {} canvas units)",
                    format.name(),
                    w,
                    h,
                    size.width,
                    size.height
                );
            }
        }
    }

    Ok(())
}

fn print_validation(validation: &Validation, request: &LayoutRequest) {
    match validation {
        Validation::Layout(result) => {
            let (w, h) = result.canvas.inches();
            println!("Layout:");
            println!("  Canvas: {:.2} x {:.2} in", w, h);
            println!("  Area: {:.2} sq in", result.canvas.area_square_inches());
            println!("  Valid: {}", result.is_valid);
            if result.page_count.is_known() {
                println!(
                    "  Pages ({}, {:?}): {} x {}",
                    request.paper_format,
                    request.orientation,
                    result.page_count.x,
                    result.page_count.y
                );
            } else {
                println!("  Pages: unknown paper format '{}'", request.paper_format);
            }
        }
        Validation::UnresolvedGeometry => {
            println!("Layout: geodesic size of the extent cannot be determined");
        }
        Validation::InvalidScale(scale) => {
            println!("Layout: invalid scale {}", scale);
        }
        Validation::Template { selected } => {
            println!("Template selected: {}", selected);
        }
    }
}
