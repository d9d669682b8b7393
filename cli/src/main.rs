//! rebind CLI - translated manuscript rebuilding tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use rebind::{
    chunk_text, layout_pages, normalize_capitalization, parse_document, to_json, JsonFormat,
    LayoutOptions, DEFAULT_MAX_CHUNK_SIZE, PARAGRAPH_DELIMITER,
};

#[derive(Parser)]
#[command(name = "rebind")]
#[command(version)]
#[command(
    about = "Rebuild structured, paginated documents from translated manuscript text",
    long_about = None
)]
struct Cli {
    /// Input manuscript file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild everything (normalized text, element JSON, page layout JSON)
    Process {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Page size for the layout pass
        #[arg(long, value_enum, default_value = "a4")]
        page_size: PageSize,
    },

    /// Split a manuscript into translation-sized chunks
    Chunk {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Maximum chunk size in characters
        #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
        max_size: usize,
    },

    /// Repair capitalization in translated text
    Normalize {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Parse manuscript structure and emit document elements as JSON
    Parse {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip capitalization repair before parsing
        #[arg(long)]
        raw: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Lay manuscript text out as pages and emit the layout as JSON
    Layout {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page size
        #[arg(long, value_enum, default_value = "a4")]
        page_size: PageSize,

        /// Page margin in points
        #[arg(long)]
        margin: Option<f32>,

        /// Base font size in points
        #[arg(long)]
        font_size: Option<f32>,

        /// Line height multiplier
        #[arg(long)]
        line_height: Option<f32>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show manuscript information
    Info {
        /// Input manuscript file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSize {
    /// A4 paper (595 x 842 points)
    A4,
    /// US Letter paper (612 x 792 points)
    Letter,
}

impl From<PageSize> for LayoutOptions {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::A4 => LayoutOptions::a4(),
            PageSize::Letter => LayoutOptions::letter(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Process {
            input,
            output,
            page_size,
        }) => cmd_process(&input, output.as_deref(), page_size),
        Some(Commands::Chunk {
            input,
            output,
            max_size,
        }) => cmd_chunk(&input, output.as_deref(), max_size),
        Some(Commands::Normalize { input, output }) => cmd_normalize(&input, output.as_deref()),
        Some(Commands::Parse {
            input,
            output,
            raw,
            compact,
        }) => cmd_parse(&input, output.as_deref(), raw, compact),
        Some(Commands::Layout {
            input,
            output,
            page_size,
            margin,
            font_size,
            line_height,
            compact,
        }) => cmd_layout(
            &input,
            output.as_deref(),
            page_size,
            margin,
            font_size,
            line_height,
            compact,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: process if input is provided
            if let Some(input) = cli.input {
                cmd_process(&input, cli.output.as_deref(), PageSize::A4)
            } else {
                println!("{}", "Usage: rebind <FILE> [OUTPUT]".yellow());
                println!("       rebind --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_process(
    input: &Path,
    output: Option<&Path>,
    page_size: PageSize,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_rebuilt", stem))
    });

    fs::create_dir_all(&output_dir)?;
    log::debug!("writing rebuilt outputs to {}", output_dir.display());

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading manuscript...");
    let text = fs::read_to_string(input)?;
    pb.inc(1);

    pb.set_message("Repairing capitalization...");
    let normalized = normalize_capitalization(&text);
    fs::write(output_dir.join("normalized.txt"), &normalized)?;
    pb.inc(1);

    pb.set_message("Recovering structure...");
    let elements = parse_document(&normalized);
    let elements_json = to_json(&elements, JsonFormat::Pretty)?;
    fs::write(output_dir.join("elements.json"), &elements_json)?;
    pb.inc(1);

    pb.set_message("Laying out pages...");
    let pages = layout_pages(&text, &LayoutOptions::from(page_size))?;
    let pages_json = to_json(&pages, JsonFormat::Pretty)?;
    fs::write(output_dir.join("pages.json"), &pages_json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} normalized.txt", "├─".dimmed());
    println!("  {} elements.json", "├─".dimmed());
    println!("  {} pages.json", "└─".dimmed());

    Ok(())
}

fn cmd_chunk(
    input: &Path,
    output: Option<&Path>,
    max_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let chunks = chunk_text(&text, max_size)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    for (i, chunk) in chunks.iter().enumerate() {
        let filename = format!("chunk-{:04}.txt", i + 1);
        fs::write(output_dir.join(&filename), chunk)?;
        println!("{} {}", "Wrote".green(), filename);
    }

    println!(
        "\n{} {} chunks written",
        "Done!".green().bold(),
        chunks.len()
    );

    Ok(())
}

fn cmd_normalize(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let normalized = normalize_capitalization(&text);

    if let Some(path) = output {
        fs::write(path, &normalized)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", normalized);
    }

    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    raw: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let text = if raw {
        text
    } else {
        normalize_capitalization(&text)
    };

    let elements = parse_document(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&elements, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    page_size: PageSize,
    margin: Option<f32>,
    font_size: Option<f32>,
    line_height: Option<f32>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;

    let mut options = LayoutOptions::from(page_size);
    if let Some(margin) = margin {
        options = options.with_margin(margin);
    }
    if let Some(size) = font_size {
        options = options.with_font_size(size);
    }
    if let Some(factor) = line_height {
        options = options.with_line_height_factor(factor);
    }

    let pages = layout_pages(&text, &options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&pages, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;

    println!("{}", "Manuscript Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words: usize = text.split_whitespace().count();
    let paragraphs = text
        .split(PARAGRAPH_DELIMITER)
        .filter(|p| !p.trim().is_empty())
        .count();

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Characters".bold(), text.len());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Paragraphs".bold(), paragraphs);

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let elements = parse_document(&text);
    let headings = elements.iter().filter(|e| e.is_heading()).count();
    let list_items = elements.iter().filter(|e| e.is_list_item()).count();
    let blocks = elements.iter().filter(|e| e.is_paragraph()).count();

    println!("{}: {}", "Headings".bold(), headings);
    println!("{}: {}", "List items".bold(), list_items);
    println!("{}: {}", "Paragraph blocks".bold(), blocks);

    let pages = layout_pages(&text, &LayoutOptions::default())?;
    println!("{}: {} (A4)", "Pages".bold(), pages.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "rebind".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Translated manuscript rebuilding tool");
    println!();
    println!("License: MIT");
}
