// glyphswap-braille: Render text as Unicode braille.
//
// Reads text from stdin (one line at a time) or the TEXT arguments and
// prints the braille rendering of each line. No data files are needed.
//
// Usage:
//   glyphswap-braille [OPTIONS] [TEXT...]
//
// Options:
//   --grade N      1 = uncontracted, 2 = contracted (default: 2)
//   --tags         Show the contraction tags instead of braille cells
//   -h, --help     Print help

use std::io::{self, BufRead, Write};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Output {
    Uncontracted,
    Contracted,
    Tags,
}

fn render(line: &str, output: Output) -> String {
    match output {
        Output::Uncontracted => glyphswap_ueb::uncontracted(line),
        Output::Contracted => glyphswap_ueb::contract(line),
        Output::Tags => glyphswap_ueb::tag(line),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = glyphswap_cli::init_logging(&args);
    let (grade, args) = glyphswap_cli::parse_option(&args, "--grade", "");

    if glyphswap_cli::wants_help(&args) {
        println!("glyphswap-braille: Render text as Unicode braille.");
        println!();
        println!("Usage: glyphswap-braille [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, renders them as one line.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Options:");
        println!("  --grade N      1 = uncontracted, 2 = contracted (default: 2)");
        println!("  --tags         Show the contraction tags instead of braille cells");
        println!("  -h, --help     Print this help");
        return;
    }

    let mut output = match grade.as_deref() {
        None | Some("2") => Output::Contracted,
        Some("1") => Output::Uncontracted,
        Some(other) => glyphswap_cli::fatal(&format!("invalid grade: {other}")),
    };
    if args.iter().any(|a| a == "--tags") {
        if output == Output::Uncontracted {
            glyphswap_cli::fatal("--tags only applies to grade 2");
        }
        output = Output::Tags;
    }

    let text: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

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
            let _ = writeln!(out, "{}", render(&line, output));
        }
    } else {
        let _ = writeln!(out, "{}", render(&text.join(" "), output));
    }
}
