//! Printbox command-line renderer
//!
//! Reads text from a file or stdin and prints it inside a box.
//! A line holding only `---` becomes a divider; `--- Caption` becomes a
//! captioned divider.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use printbox::{BoxConfig, BoxSettings, BoxWriter, Encoding};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments
#[derive(Debug, Default)]
struct Args {
    /// Settings file applied before the other flags
    config: Option<PathBuf>,
    /// Input file (stdin if not specified)
    input: Option<PathBuf>,
    width: Option<usize>,
    border: Option<String>,
    glyphs: Option<String>,
    no_wrap: bool,
    encoding: Option<Encoding>,
    header: Option<String>,
    footer: Option<String>,
    help: bool,
}

fn parse_args(argv: &[String]) -> Args {
    let mut args = Args::default();

    let mut i = 0;
    while i < argv.len() {
        let flag = argv[i].as_str();
        let mut value = || {
            i += 1;
            let v = argv.get(i).cloned();
            if v.is_none() {
                tracing::warn!("Missing value for {}", flag);
            }
            v
        };
        match flag {
            "-h" | "--help" => args.help = true,
            "-c" | "--config" => args.config = value().map(PathBuf::from),
            "-i" | "--input" => args.input = value().map(PathBuf::from),
            "-w" | "--width" => {
                if let Some(v) = value() {
                    match v.parse() {
                        Ok(width) => args.width = Some(width),
                        Err(_) => tracing::warn!("Ignoring invalid width {:?}", v),
                    }
                }
            },
            "-b" | "--border" => args.border = value(),
            "-g" | "--glyphs" => args.glyphs = value(),
            "--no-wrap" => args.no_wrap = true,
            "-e" | "--encoding" => {
                if let Some(v) = value() {
                    match Encoding::from_name(&v) {
                        Some(encoding) => args.encoding = Some(encoding),
                        None => tracing::warn!("Ignoring unknown encoding {:?}", v),
                    }
                }
            },
            "-H" | "--header" => args.header = value(),
            "-F" | "--footer" => args.footer = value(),
            other => {
                // Treat as input file if no flag
                if args.input.is_none() && !other.starts_with('-') {
                    args.input = Some(PathBuf::from(other));
                } else {
                    tracing::warn!("Ignoring unknown argument {:?}", other);
                }
            },
        }
        i += 1;
    }

    args
}

/// Overlay command-line flags on the loaded settings
fn apply_args(mut settings: BoxSettings, args: &Args) -> BoxSettings {
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(border) = &args.border {
        settings.border = border.clone();
        if !border.eq_ignore_ascii_case("custom") {
            settings.glyphs = None;
        }
    }
    if let Some(glyphs) = &args.glyphs {
        settings.border = "custom".to_string();
        settings.glyphs = Some(glyphs.clone());
    }
    if args.no_wrap {
        settings.word_wrap = false;
    }
    if let Some(encoding) = args.encoding {
        settings.encoding = encoding;
    }
    settings
}

/// Render the whole input as one box
fn render_document<W: Write>(
    writer: &mut BoxWriter<'_, W>,
    input: &str,
    header: Option<&str>,
    footer: Option<&str>,
) -> printbox::Result<()> {
    match header {
        Some(caption) => writer.header_with(caption)?,
        None => writer.header()?,
    }

    // Newline-terminated lines, so trailing blank lines keep their rows
    let mut block = String::new();
    let mut rendered_any = false;
    for line in input.lines() {
        let caption = match line.strip_prefix("---") {
            Some("") => None,
            Some(rest) if rest.starts_with(' ') => Some(rest.trim()),
            _ => {
                block.push_str(line);
                block.push('\n');
                continue;
            },
        };

        if !block.is_empty() {
            writer.text(&block)?;
            block.clear();
        }
        match caption {
            Some(caption) if !caption.is_empty() => writer.divider_with(caption)?,
            _ => writer.divider()?,
        }
        rendered_any = true;
    }
    if !block.is_empty() || !rendered_any {
        writer.text(&block)?;
    }

    match footer {
        Some(caption) => writer.footer_with(caption),
        None => writer.footer(),
    }
}

fn run(args: &Args) -> printbox::Result<()> {
    let settings = match &args.config {
        Some(path) => BoxSettings::load(path)?,
        None => BoxSettings::default(),
    };
    let settings = apply_args(settings, args);
    let config: BoxConfig = settings.to_config()?;

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            data
        },
    };

    let stdout = io::stdout();
    let mut writer = BoxWriter::with_encoding(&config, stdout.lock(), settings.encoding);
    render_document(
        &mut writer,
        &input,
        args.header.as_deref(),
        args.footer.as_deref(),
    )?;
    writer.flush()?;
    tracing::debug!("Wrote {} rows", writer.lines_written());
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv);

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("printbox: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn print_help() {
    println!("Printbox - draw text inside a box");
    println!();
    println!("Usage: printbox [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -w, --width <N>          Content width in columns (default: 76)");
    println!("  -b, --border <NAME>      simple, single or double (default: single)");
    println!("  -g, --glyphs <GLYPHS>    Custom border: 8 glyphs, TL TR ML MR BL BR H V");
    println!("      --no-wrap            Break lines at the width instead of between words");
    println!("  -H, --header <TEXT>      Caption for the top border");
    println!("  -F, --footer <TEXT>      Caption for the bottom border");
    println!("  -e, --encoding <NAME>    utf8, latin1 or ascii (default: utf8)");
    println!("  -c, --config <PATH>      Read settings from a JSON file");
    println!("  -i, --input <PATH>       Read text from a file");
    println!("  -h, --help               Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!("A line containing only '---' draws a divider, '--- Text' a captioned one.");
    println!();
    println!("Examples:");
    println!("  echo 'Hello, World!' | printbox -w 20 -H Greeting");
    println!("  printbox -b double --no-wrap notes.txt");
    println!("  printbox -g '**++**-|' -e ascii < report.txt");
}
