//! reflow CLI - converter output cleaning tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use reflow::{
    parse_file_with_options, CleanStats, JsonFormat, ParseOptions, RenderOptions, SourceClasses,
};

#[derive(Parser)]
#[command(name = "reflow")]
#[command(version)]
#[command(about = "Rebuild clean HTML from positioned PDF-to-HTML converter output", long_about = None)]
struct Cli {
    /// Input converter HTML file(s)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Suffix appended to input file stems for output names
    #[arg(long, default_value = "-cleaned")]
    suffix: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean converter output files into flowing HTML
    Clean {
        /// Input converter HTML file(s)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input only; derived from the input otherwise)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Suffix appended to input file stems for output names
        #[arg(long, default_value = "-cleaned")]
        suffix: String,

        /// Title placed in the output document head
        #[arg(long)]
        title: Option<String>,

        /// Class marking page containers
        #[arg(long, value_name = "CLASS")]
        page_class: Option<String>,

        /// Class marking positioned text containers
        #[arg(long, value_name = "CLASS")]
        text_class: Option<String>,

        /// Class marking text spans
        #[arg(long, value_name = "CLASS")]
        span_class: Option<String>,

        /// Class marking images
        #[arg(long, value_name = "CLASS")]
        image_class: Option<String>,

        /// Spaces per indentation level in the output
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Print content statistics after cleaning
        #[arg(long)]
        stats: bool,
    },

    /// Extract plain text from converter output
    Text {
        /// Input converter HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert converter output to JSON
    Json {
        /// Input converter HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show source layout and content information
    Info {
        /// Input converter HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the information as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clean {
            inputs,
            output,
            suffix,
            title,
            page_class,
            text_class,
            span_class,
            image_class,
            indent,
            stats,
        }) => {
            let classes = build_classes(page_class, text_class, span_class, image_class);
            cmd_clean(
                &inputs,
                output.as_deref(),
                &suffix,
                title.as_deref(),
                classes,
                indent,
                stats,
            )
        }
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: clean if inputs are provided
            if !cli.inputs.is_empty() {
                cmd_clean(
                    &cli.inputs,
                    None,
                    &cli.suffix,
                    None,
                    SourceClasses::default(),
                    2,
                    false,
                )
            } else {
                println!("{}", "Usage: reflow <FILE>...".yellow());
                println!("       reflow --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_classes(
    page: Option<String>,
    text: Option<String>,
    span: Option<String>,
    image: Option<String>,
) -> SourceClasses {
    let mut classes = SourceClasses::default();
    if let Some(class) = page {
        classes = classes.with_page(class);
    }
    if let Some(class) = text {
        classes = classes.with_text(class);
    }
    if let Some(class) = span {
        classes = classes.with_span(class);
    }
    if let Some(class) = image {
        classes = classes.with_image(class);
    }
    classes
}

/// Derive the output path for an input: same directory, stem plus suffix.
fn derive_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}{suffix}.html"))
}

fn cmd_clean(
    inputs: &[PathBuf],
    output: Option<&Path>,
    suffix: &str,
    title: Option<&str>,
    classes: SourceClasses,
    indent: usize,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if output.is_some() && inputs.len() > 1 {
        return Err("--output is only valid with a single input; use --suffix for batches".into());
    }

    let parse_options = ParseOptions::new().with_classes(classes);
    let mut render_options = RenderOptions::new().with_indent(indent);
    if let Some(title) = title {
        render_options = render_options.with_title(title);
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut totals = CleanStats::new();
    for input in inputs {
        pb.set_message(input.display().to_string());

        let out_path = match output {
            Some(path) => path.to_path_buf(),
            None => derive_output(input, suffix),
        };
        log::debug!("cleaning {} -> {}", input.display(), out_path.display());

        let doc = parse_file_with_options(input, parse_options.clone())?;
        if stats {
            let result = reflow::render::to_html_with_stats(&doc, &render_options)?;
            fs::write(&out_path, &result.content)?;
            totals.merge(&result.stats);
        } else {
            let html = reflow::render::to_html(&doc, &render_options)?;
            fs::write(&out_path, &html)?;
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} {} file{} cleaned",
        "Done!".green().bold(),
        inputs.len(),
        if inputs.len() == 1 { "" } else { "s" }
    );

    if stats {
        println!();
        println!("{}", "Content Statistics".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Pages".bold(), totals.page_count);
        println!("{}: {}", "Headings".bold(), totals.heading_count);
        println!("{}: {}", "Paragraphs".bold(), totals.paragraph_count);
        println!("{}: {}", "Images".bold(), totals.image_count);
        println!("{}: {}", "Words".bold(), totals.word_count);
        println!("{}: {}", "Characters".bold(), totals.char_count);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reflow::parse_file(input)?;
    let text = reflow::render::to_text(&doc)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = reflow::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = reflow::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let html = fs::read_to_string(input)?;
    let summary = reflow::detect::summarize(&html, &SourceClasses::default())?;
    let doc = reflow::parse_html(&html)?;

    let headings = doc.blocks().filter(|b| b.is_heading()).count();
    let paragraphs = doc.blocks().filter(|b| b.is_paragraph()).count();
    let images = doc.blocks().filter(|b| b.is_image()).count();
    let text = doc.plain_text();
    let words = text.split_whitespace().count();

    if as_json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "source": {
                "pages": summary.pages,
                "fragments": summary.fragments,
                "images": summary.images,
            },
            "content": {
                "blocks": doc.block_count(),
                "headings": headings,
                "paragraphs": paragraphs,
                "images": images,
                "words": words,
            },
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Source Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), summary.pages);
    println!("{}: {}", "Fragments".bold(), summary.fragments);
    println!("{}: {}", "Images".bold(), summary.images);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Headings".bold(), headings);
    println!("{}: {}", "Paragraphs".bold(), paragraphs);
    println!("{}: {}", "Images".bold(), images);
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "reflow".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Converter output cleaning tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/reflow-rs/reflow".dimmed()
    );
    println!("License: MIT");
}
