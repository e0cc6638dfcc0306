// glyphswap-dispatch: Answer encoder requests over JSON lines.
//
// Reads one JSON request per line from stdin and writes one JSON response
// per line to stdout. Encoders are built and loaded on first use and kept
// for the rest of the session.
//
// Requests:
//   {"type":"can-handle","encoder":"phonetic","word":"hello"}
//   {"type":"transform","encoder":"braille","word":"and","options":{"kind":"braille","grade":"two"}}
//   {"type":"info","encoder":"cockney"}
//
// Usage:
//   glyphswap-dispatch [-d DATA_PATH] [-v|-q]
//
// Options:
//   -d, --data-path PATH   Directory containing the JSON data documents
//   --seed N               Seed for encoders that pick random entries
//   -v, --verbose          Debug logging on stderr
//   -q, --quiet            Errors only on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use glyphswap_core::config::DEFAULT_SEED;
use glyphswap_engine::{DispatchRequest, FileLoader, Registry};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = glyphswap_cli::init_logging(&args);
    let (data_path, args) = glyphswap_cli::parse_data_path(&args);
    let (seed, args) = glyphswap_cli::parse_option(&args, "--seed", "");

    if glyphswap_cli::wants_help(&args) {
        println!("glyphswap-dispatch: Answer encoder requests over JSON lines.");
        println!();
        println!("Usage: glyphswap-dispatch [-d DATA_PATH] [-v|-q]");
        println!();
        println!("Reads one JSON request per line from stdin and writes one");
        println!("JSON response per line to stdout.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing the JSON data documents");
        println!("  --seed N               Seed for encoders that pick random entries");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -q, --quiet            Errors only on stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    let seed = match seed {
        Some(s) => s
            .parse()
            .unwrap_or_else(|_| glyphswap_cli::fatal("invalid number for --seed")),
        None => DEFAULT_SEED,
    };
    let data_dir = glyphswap_cli::data_dir_or_default(data_path.as_deref());
    let registry = Registry::with_seed(Rc::new(FileLoader::new(data_dir)), seed);

    glyphswap_cli::runtime().block_on(async {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<DispatchRequest>(&line) {
                Ok(request) => serde_json::to_string(&registry.dispatch(request).await),
                Err(e) => {
                    log::error!("invalid request: {e}");
                    serde_json::to_string(&serde_json::json!({
                        "type": "error",
                        "message": e.to_string(),
                    }))
                }
            };
            match response {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                    let _ = out.flush();
                }
                Err(e) => glyphswap_cli::fatal(&format!("failed to encode response: {e}")),
            }
        }
    });
}
