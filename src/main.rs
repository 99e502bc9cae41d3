//! patternbook - browse design patterns from the terminal

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use patternbook::catalog::{self, PatternCategory};
use patternbook::config::Config;
use patternbook::render::{code_block, TerminalRenderer};
use patternbook::syntax::{detect_language, highlight};
use patternbook::{Error, Result};

/// Output options shared by `show` and `highlight`
#[derive(Debug, Default)]
struct OutputFlags {
    html: bool,
    no_color: bool,
    lang: Option<String>,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install a subscriber only when RUST_LOG is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("patternbook {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "list" => {
            list_patterns();
            Ok(())
        }
        "show" => {
            let (positional, flags) = parse_flags(&args[1..])?;
            let id = positional
                .first()
                .ok_or_else(|| Error::Usage("show: missing pattern id".to_string()))?;
            show_pattern(id, &flags)
        }
        "highlight" => {
            let (positional, flags) = parse_flags(&args[1..])?;
            let file = positional.first().ok_or_else(|| {
                Error::Usage("highlight: missing file (use - for stdin)".to_string())
            })?;
            highlight_file(file, &flags)
        }
        other => Err(Error::Usage(format!(
            "unknown command `{}` (try --help)",
            other
        ))),
    }
}

fn parse_flags(args: &[String]) -> Result<(Vec<String>, OutputFlags)> {
    let mut positional = Vec::new();
    let mut flags = OutputFlags::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--html" => flags.html = true,
            "--no-color" => flags.no_color = true,
            "--lang" => {
                let lang = iter
                    .next()
                    .ok_or_else(|| Error::Usage("--lang needs a value".to_string()))?;
                flags.lang = Some(lang.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(Error::Usage(format!("unknown option `{}`", flag)));
            }
            _ => positional.push(arg.clone()),
        }
    }

    Ok((positional, flags))
}

fn list_patterns() {
    for category in PatternCategory::ALL {
        println!("{}", category);
        for pattern in catalog::by_category(category) {
            println!("  {:<18} {}", pattern.id, pattern.summary);
        }
        println!();
    }
}

fn show_pattern(id: &str, flags: &OutputFlags) -> Result<()> {
    let pattern = catalog::find(id).ok_or_else(|| Error::UnknownPattern(id.to_string()))?;
    let language = flags.lang.as_deref().unwrap_or(pattern.language);
    let markup = highlight(pattern.code, Some(language));

    if flags.html {
        println!("{}", code_block(&markup));
        return Ok(());
    }

    println!("{} ({})", pattern.name, pattern.category);
    println!();
    println!("{}", pattern.description);
    println!();
    println!("{}", pattern.rationale);
    println!();

    let renderer = renderer(flags)?;
    renderer.render(&mut io::stdout().lock(), &markup, Some(pattern.name))
}

fn highlight_file(file: &str, flags: &OutputFlags) -> Result<()> {
    let source = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file)?
    };

    let language = flags
        .lang
        .as_deref()
        .or_else(|| detect_language(Path::new(file)));
    let markup = highlight(&source, language);

    if flags.html {
        println!("{}", code_block(&markup));
        return Ok(());
    }

    let title = (file != "-").then_some(file);
    renderer(flags)?.render(&mut io::stdout().lock(), &markup, title)
}

fn renderer(flags: &OutputFlags) -> Result<TerminalRenderer> {
    let config = Config::load()?;
    let color = config.color && !flags.no_color;
    Ok(TerminalRenderer::new(&config).with_color(color))
}

fn print_usage() {
    println!(
        "patternbook {} - design patterns with highlighted samples",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage:");
    println!("  patternbook list                     List all patterns by category");
    println!("  patternbook show <id> [OPTIONS]      Show a pattern and its code sample");
    println!("  patternbook highlight <file|-> [OPTIONS]");
    println!("                                       Highlight a source file (- reads stdin)");
    println!();
    println!("Options:");
    println!("  --html         Print an HTML code block instead of terminal output");
    println!("  --no-color     Disable terminal colors");
    println!("  --lang <name>  Language label for the badge");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Settings are read from ~/.patternbook.toml");
}
