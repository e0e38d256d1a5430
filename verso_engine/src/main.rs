// Verso verse generator: CLI entry point.
//
// Generates one or more poems and prints them (plain or as JSON), optionally
// writing the plain-text export to a file.
//
// Usage:
//   cargo run -p verso_engine -- [--topic TEXT] [--form FORM] [--seed N]
//     [--count N] [--config PATH] [--lexicon PATH] [--json] [--out PATH]
//
// Forms: monorhyme-quatrain (cuaderna), assonant-octave (romance),
//        rhymed-couplet (pareado)
//
// Logging goes through env_logger; set RUST_LOG=debug to trace each line
// through the pipeline.

use log::{error, info, warn};
use std::path::{Path, PathBuf};
use verso_engine::poem::time_seed;
use verso_engine::{Form, GenerateResponse, PoemRequest, VerseConfig, VerseError, generate_batch};
use verso_lang::{Lexicon, default_lexicon};

/// Parsed command-line options.
#[derive(Debug, Default)]
struct CliArgs {
    topic: Option<String>,
    form: Form,
    seed: Option<i64>,
    count: usize,
    config_path: Option<PathBuf>,
    lexicon_path: Option<PathBuf>,
    json: bool,
    out: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = parse_args();
    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), VerseError> {
    let config = match &args.config_path {
        Some(path) => VerseConfig::load(path)?,
        None => VerseConfig::default(),
    };
    let lexicon = match &args.lexicon_path {
        Some(path) => Lexicon::from_json(&std::fs::read_to_string(path)?)?,
        None => default_lexicon(),
    };

    let base_seed = args.seed.unwrap_or_else(time_seed);
    info!("form {}, seed {base_seed}, {} poem(s)", args.form, args.count);

    let requests: Vec<PoemRequest> = (0..args.count)
        .map(|i| PoemRequest {
            topic: args.topic.clone(),
            form: args.form,
            seed: Some(base_seed.wrapping_add(i as i64)),
        })
        .collect();
    let responses = generate_batch(&requests, &lexicon, &config);

    if args.json {
        let json = if responses.len() == 1 {
            serde_json::to_string_pretty(&responses[0])?
        } else {
            serde_json::to_string_pretty(&responses)?
        };
        println!("{json}");
    } else {
        for (request, response) in requests.iter().zip(&responses) {
            print_response(request, response);
        }
    }

    if let Some(path) = &args.out {
        write_export(path, &responses)?;
    }
    Ok(())
}

fn print_response(request: &PoemRequest, response: &GenerateResponse) {
    match response {
        GenerateResponse::Poem(poem) => {
            println!("=== {} ===", poem.title);
            println!("{} | {}", poem.form, poem.scheme);
            if let Some(seed) = request.seed {
                println!("seed {seed}");
            }
            println!();
            for line in &poem.lines {
                println!("  {line}");
            }
            println!();
        }
        GenerateResponse::Error { error } => eprintln!("Error: {error}"),
    }
}

/// Write every generated poem's plain text, separated by blank lines.
fn write_export(path: &Path, responses: &[GenerateResponse]) -> Result<(), VerseError> {
    let texts: Vec<String> = responses
        .iter()
        .filter_map(GenerateResponse::poem)
        .map(|poem| poem.to_plain_text())
        .collect();
    std::fs::write(path, texts.join("\n\n") + "\n")?;
    info!("wrote {} poem(s) to {}", texts.len(), path.display());
    Ok(())
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching.
fn parse_args() -> CliArgs {
    let mut args = CliArgs {
        count: 1,
        ..CliArgs::default()
    };
    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "--topic" => {
                i += 1;
                args.topic = Some(require_value(&argv, i, "--topic"));
            }
            "--form" => {
                i += 1;
                let name = require_value(&argv, i, "--form");
                args.form = Form::from_name(&name).unwrap_or_else(|| {
                    warn!("unknown form '{name}', using {}", Form::default());
                    Form::default()
                });
            }
            "--seed" => {
                i += 1;
                args.seed = Some(parse_number(&argv, i, "--seed"));
            }
            "--count" => {
                i += 1;
                args.count = parse_number::<usize>(&argv, i, "--count").max(1);
            }
            "--config" => {
                i += 1;
                args.config_path = Some(require_value(&argv, i, "--config").into());
            }
            "--lexicon" => {
                i += 1;
                args.lexicon_path = Some(require_value(&argv, i, "--lexicon").into());
            }
            "--out" => {
                i += 1;
                args.out = Some(require_value(&argv, i, "--out").into());
            }
            "--json" => args.json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn require_value(argv: &[String], i: usize, flag: &str) -> String {
    argv.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{flag} requires a value");
        std::process::exit(1);
    })
}

fn parse_number<T: std::str::FromStr>(argv: &[String], i: usize, flag: &str) -> T {
    argv.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("{flag} requires a valid number");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: generate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --topic <TEXT>     What the poem is about (default: none)");
    println!("  --form <FORM>      monorhyme-quatrain | assonant-octave | rhymed-couplet");
    println!("                     (also cuaderna, romance, pareado; default: monorhyme-quatrain)");
    println!("  --seed <N>         Generator seed (default: current time)");
    println!("  --count <N>        Number of poems, with consecutive seeds (default: 1)");
    println!("  --config <PATH>    JSON generation config");
    println!("  --lexicon <PATH>   JSON lexical bank replacing the built-in one");
    println!("  --json             Print JSON responses instead of text");
    println!("  --out <PATH>       Also write the plain-text poem(s) to PATH");
    println!("  --help, -h         Show this help");
}
