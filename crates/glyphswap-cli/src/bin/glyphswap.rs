// glyphswap: Swap words of text into other scripts.
//
// Reads text from stdin (or the TEXT arguments) and prints it with some
// words replaced by encoder markup. One scheduler serves the whole run, so
// the neglected queue carries over from line to line.
//
// Usage:
//   glyphswap [-d DATA_PATH] [OPTIONS] [TEXT...]
//
// Options:
//   -d, --data-path PATH   Directory containing the JSON data documents
//   -c, --config PATH      JSON swap configuration
//   --encoders LIST        Comma-separated encoder keys (overrides config)
//   --frequency N          Percentage of words to swap (overrides config)
//   --seed N               Seed for reproducible output (overrides config)
//   --plain                Print replacement text without markup
//   -v, --verbose          Debug logging on stderr
//   -q, --quiet            Errors only on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use glyphswap_core::EncoderKey;
use glyphswap_engine::{FileLoader, Registry, Scheduler, SwapAttempt};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = glyphswap_cli::init_logging(&args);
    let (data_path, args) = glyphswap_cli::parse_data_path(&args);
    let (config_path, args) = glyphswap_cli::parse_option(&args, "--config", "-c");
    let (encoders, args) = glyphswap_cli::parse_option(&args, "--encoders", "");
    let (frequency, args) = glyphswap_cli::parse_option(&args, "--frequency", "");
    let (seed, args) = glyphswap_cli::parse_option(&args, "--seed", "");

    if glyphswap_cli::wants_help(&args) {
        println!("glyphswap: Swap words of text into other scripts.");
        println!();
        println!("Usage: glyphswap [-d DATA_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, processes them as one line.");
        println!("Otherwise reads text from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing the JSON data documents");
        println!("  -c, --config PATH      JSON swap configuration");
        println!("  --encoders LIST        Comma-separated encoder keys (overrides config)");
        println!("  --frequency N          Percentage of words to swap (overrides config)");
        println!("  --seed N               Seed for reproducible output (overrides config)");
        println!("  --plain                Print replacement text without markup");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -q, --quiet            Errors only on stderr");
        println!("  -h, --help             Print this help");
        println!();
        println!(
            "Encoders: {}",
            EncoderKey::ALL.map(EncoderKey::as_str).join(", ")
        );
        return;
    }

    let mut config = glyphswap_cli::load_config(config_path.as_deref())
        .unwrap_or_else(|e| glyphswap_cli::fatal(&e));
    if let Some(list) = encoders {
        config.encoders = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.parse::<EncoderKey>()
                    .unwrap_or_else(|e| glyphswap_cli::fatal(&e.to_string()))
            })
            .collect();
    }
    if let Some(frequency) = frequency {
        config.swap_frequency = frequency
            .parse()
            .unwrap_or_else(|_| glyphswap_cli::fatal("invalid number for --frequency"));
    }
    if let Some(seed) = seed {
        config.seed = Some(
            seed.parse()
                .unwrap_or_else(|_| glyphswap_cli::fatal("invalid number for --seed")),
        );
    }
    config.normalize();
    if config.encoders.is_empty() {
        config.encoders = EncoderKey::ALL.to_vec();
    }

    let plain = args.iter().any(|a| a == "--plain");
    let text: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str)
        .collect();

    let data_dir = glyphswap_cli::data_dir_or_default(data_path.as_deref());
    let registry = Registry::with_seed(Rc::new(FileLoader::new(data_dir)), config.seed());

    glyphswap_cli::runtime().block_on(async {
        let mut scheduler = Scheduler::new(&registry, config);
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());

        if text.is_empty() {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        break;
                    }
                };
                process_line(&mut scheduler, &line, plain, &mut out).await;
            }
        } else {
            process_line(&mut scheduler, &text.join(" "), plain, &mut out).await;
        }
    });
}

async fn process_line(
    scheduler: &mut Scheduler<'_>,
    line: &str,
    plain: bool,
    out: &mut impl Write,
) {
    let attempts = scheduler
        .process_tokens(line)
        .await
        .unwrap_or_else(|e| glyphswap_cli::fatal(&e.to_string()));
    let rendered: String = attempts.iter().map(|a| render(a, plain)).collect();
    let _ = writeln!(out, "{rendered}");
}

fn render(attempt: &SwapAttempt, plain: bool) -> String {
    match &attempt.swap {
        Some(swap) if plain => format!("{}{}", swap.text, attempt.punctuation),
        _ => attempt.output(),
    }
}
