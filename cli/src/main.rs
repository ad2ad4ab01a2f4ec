//! azkar-story CLI - deterministic story layouts from the command line

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use azkar_story::{
    compose_story, create_design_with, generate_designs, parse_seed, random_seed, render,
    seed_from_file_name, Design, DesignOverrides, DisplayOptions, JsonFormat, LibraryLoader,
    LoadOptions, Mode, StoryRequest, Template,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "azkar-story")]
#[command(version)]
#[command(about = "Generate deterministic story layouts for remembrance texts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the design chosen by a seed
    Design {
        /// Seed in hex (e.g. "1234" or "0x1234"); random when omitted
        #[arg(short, long)]
        seed: Option<String>,

        /// Force a template
        #[arg(long, value_enum)]
        template: Option<TemplateArg>,

        /// Force a palette mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose a story and print its render tree
    Story {
        /// Content files, tried in order
        #[arg(short, long, value_name = "FILE", env = "AZKAR_DATA", value_delimiter = ',', required = true)]
        data: Vec<PathBuf>,

        /// Section id (first section when omitted or unknown)
        #[arg(long)]
        section: Option<String>,

        /// Seed in hex; random when omitted
        #[arg(short, long)]
        seed: Option<String>,

        /// Steps forward from the seed's item
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Render this many consecutive items as a list
        #[arg(short, long)]
        group: Option<usize>,

        /// JSON file with display options
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Number of list columns (1-3)
        #[arg(long)]
        columns: Option<u8>,

        /// Hide the benefit text
        #[arg(long)]
        no_benefit: bool,

        /// Hide count badges and descriptions
        #[arg(long)]
        no_count: bool,

        /// Hide the watermark
        #[arg(long)]
        no_watermark: bool,

        /// Force a template
        #[arg(long, value_enum)]
        template: Option<TemplateArg>,

        /// Force a palette mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Canvas width in pixels
        #[arg(long, default_value = "1080")]
        width: u32,

        /// Fail on malformed sections or items
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the sections of a content file
    Sections {
        /// Content files, tried in order
        #[arg(short, long, value_name = "FILE", env = "AZKAR_DATA", value_delimiter = ',', required = true)]
        data: Vec<PathBuf>,
    },

    /// Print a new random seed, or recover one from a file name
    Seed {
        /// File name produced by a previous run
        #[arg(value_name = "NAME")]
        file_name: Option<String>,
    },

    /// Compute designs for many seeds in parallel
    Batch {
        /// Number of consecutive seeds
        #[arg(short = 'n', long, default_value = "16")]
        count: u32,

        /// First seed in hex; random when omitted
        #[arg(short, long)]
        start: Option<String>,

        /// Output JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TemplateArg {
    Frame,
    Center,
    Split,
    Stack,
    List,
    Paper,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Frame => Template::Frame,
            TemplateArg::Center => Template::Center,
            TemplateArg::Split => Template::Split,
            TemplateArg::Stack => Template::Stack,
            TemplateArg::List => Template::List,
            TemplateArg::Paper => Template::Paper,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Dark gradient backgrounds
    Dark,
    /// Light backgrounds with a paper fill
    Light,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Dark => Mode::Dark,
            ModeArg::Light => Mode::Light,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full story as JSON
    Json,
    /// Plain text outline of the layout
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Design {
            seed,
            template,
            mode,
            json,
        }) => cmd_design(seed.as_deref(), overrides(template, mode), json),
        Some(Commands::Story {
            data,
            section,
            seed,
            offset,
            group,
            options,
            columns,
            no_benefit,
            no_count,
            no_watermark,
            template,
            mode,
            width,
            strict,
            format,
            compact,
            output,
        }) => display_options(
            options.as_deref(),
            columns,
            no_benefit,
            no_count,
            no_watermark,
        )
        .and_then(|display| {
            let request = StoryRequest::new(resolve_seed(seed.as_deref())?)
                .with_offset(offset)
                .with_overrides(overrides(template, mode))
                .with_canvas_width(width);
            let request = match section {
                Some(id) => request.with_section(id),
                None => request,
            };
            let request = match group {
                Some(size) => request.with_group(size),
                None => request,
            };
            cmd_story(
                &data,
                strict,
                &request,
                &display,
                format,
                compact,
                output.as_deref(),
            )
        }),
        Some(Commands::Sections { data }) => cmd_sections(&data),
        Some(Commands::Seed { file_name }) => cmd_seed(file_name.as_deref()),
        Some(Commands::Batch { count, start, json }) => cmd_batch(count, start.as_deref(), json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: azkar-story <COMMAND>".yellow());
            println!("       azkar-story --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn overrides(template: Option<TemplateArg>, mode: Option<ModeArg>) -> DesignOverrides {
    DesignOverrides {
        template: template.map(Into::into),
        mode: mode.map(Into::into),
    }
}

fn resolve_seed(code: Option<&str>) -> Result<u32, Box<dyn std::error::Error>> {
    match code {
        Some(code) => Ok(parse_seed(code)?),
        None => {
            let seed = random_seed();
            log::info!("using random seed {:x}", seed);
            Ok(seed)
        }
    }
}

fn display_options(
    file: Option<&Path>,
    columns: Option<u8>,
    no_benefit: bool,
    no_count: bool,
    no_watermark: bool,
) -> Result<DisplayOptions, Box<dyn std::error::Error>> {
    let mut options = match file {
        Some(path) => serde_json::from_str::<DisplayOptions>(&fs::read_to_string(path)?)?,
        None => DisplayOptions::default(),
    };

    if let Some(columns) = columns {
        options = options.with_columns(columns);
    }
    if no_benefit {
        options = options.with_benefit(false);
    }
    if no_count {
        options = options.with_count(false);
    }
    if no_watermark {
        options = options.with_watermark(false);
    }

    Ok(options)
}

fn loader(strict: bool) -> LibraryLoader {
    let options = if strict {
        LoadOptions::new().strict()
    } else {
        LoadOptions::new()
    };
    LibraryLoader::with_options(options)
}

fn cmd_design(seed: Option<&str>, overrides: DesignOverrides, json: bool) -> CliResult {
    let seed = resolve_seed(seed)?;
    let design = create_design_with(seed, &overrides);

    if json {
        println!("{}", render::to_json(&design, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{} {:x}", "Seed".cyan().bold(), seed);
    println!("{}", "─".repeat(40).dimmed());
    print_design(&design);

    Ok(())
}

fn print_design(design: &Design) {
    let palette = &design.background;
    println!("{}: {}", "Template".bold(), design.template);
    println!("{}: {}", "Mode".bold(), palette.mode);
    println!(
        "{}: {} → {} (accent {})",
        "Palette".bold(),
        palette.from,
        palette.to,
        palette.accent
    );
    if let Some(paper) = palette.paper {
        println!("{}: {}", "Paper".bold(), paper);
    }
    println!("{}: {}", "Font".bold(), design.font);
    println!(
        "{}: {}",
        "Pattern".bold(),
        if design.decorations.show_pattern { "Yes" } else { "No" }
    );
    println!(
        "{}: {}",
        "Glow".bold(),
        if design.decorations.show_glow { "Yes" } else { "No" }
    );
}

fn cmd_story(
    data: &[PathBuf],
    strict: bool,
    request: &StoryRequest,
    display: &DisplayOptions,
    format: OutputFormat,
    compact: bool,
    output: Option<&Path>,
) -> CliResult {
    let library = loader(strict).load_first(data)?;
    let story = compose_story(&library, request, display)?;

    let rendered = match format {
        OutputFormat::Json => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&story, format)?
        }
        OutputFormat::Text => render::to_text(&story.tree),
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    eprintln!("{} {}", "Story".green().bold(), story.file_stem);

    Ok(())
}

fn cmd_sections(data: &[PathBuf]) -> CliResult {
    let library = loader(false).load_first(data)?;

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in &library.sections {
        println!(
            "{} {} {}",
            section.id.bold(),
            section.title,
            format!("({} items)", section.len()).dimmed()
        );
    }

    println!();
    println!(
        "{}: {}",
        "Total items".bold(),
        library.item_count()
    );

    Ok(())
}

fn cmd_seed(file_name: Option<&str>) -> CliResult {
    let seed = match file_name {
        Some(name) => seed_from_file_name(name)?,
        None => random_seed(),
    };
    println!("{:x}", seed);
    Ok(())
}

fn cmd_batch(count: u32, start: Option<&str>, json: bool) -> CliResult {
    let start = resolve_seed(start)?;
    let seeds: Vec<u32> = (0..count).map(|i| start.wrapping_add(i)).collect();
    let designs = generate_designs(&seeds);

    for (seed, design) in seeds.iter().zip(&designs) {
        if json {
            println!("{}", render::to_json(design, JsonFormat::Compact)?);
        } else {
            println!(
                "{:>8x}  {:<7} {:<6} {:<6} {}",
                seed,
                design.template,
                design.background.mode,
                design.font,
                design.background.from.dimmed()
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "azkar-story".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Deterministic story layouts for remembrance texts");
    println!();
    println!(
        "Catalog version: {}",
        azkar_story::CATALOG_VERSION.to_string().dimmed()
    );
}
