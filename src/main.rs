//! Page-Replacement Simulator - Main Entry Point
//!
//! Usage: pagesim [OPTIONS] <policy> <num_frames> <input_file> [output_file]
//!
//! Arguments:
//!   policy      - Replacement policy: fifo, lru, clock or optimal
//!   num_frames  - Number of physical frames (positive integer)
//!   input_file  - File containing the page reference string
//!   output_file - Optional file for per-reference frame indices
//!
//! Options:
//!   -v, --verbose  Print each reference's outcome
//!   -h, --help     Print help information

use std::env;
use std::process;

use anyhow::{Context, Result, anyhow};

use pagesim::driver::{self, Outcome};
use pagesim::io::{read_reference_string, write_frame_trace};
use pagesim::policy::PolicyKind;

/// Command-line configuration
struct Config {
    policy: PolicyKind,
    num_frames: usize,
    input_file: String,
    output_file: Option<String>,
    verbose: bool,
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_help(program: &str) {
    eprintln!("Page-Replacement Simulator - Replays a page reference string");
    eprintln!();
    eprintln!("Usage: {program} [OPTIONS] <policy> <num_frames> <input_file> [output_file]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  policy      - Replacement policy: fifo, lru, clock or optimal");
    eprintln!("  num_frames  - Number of physical frames");
    eprintln!("  input_file  - File with space-separated page numbers");
    eprintln!("  output_file - Optional output for per-reference frame indices");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose  Print each reference's outcome");
    eprintln!("  -h, --help     Print this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {program} fifo 3 refs.txt");
    eprintln!("  {program} -v lru 4 refs.txt frames.txt");
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    let mut verbose = false;
    let mut positional: Vec<&String> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(program);
                process::exit(0);
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            _ if arg.starts_with('-') => {
                return Err(format!(
                    "Unknown option: {arg}\nUse --help for usage information."
                ));
            }
            _ => {
                positional.push(arg);
            }
        }
    }

    if positional.len() < 3 || positional.len() > 4 {
        print_help(program);
        return Err(format!(
            "\nError: Expected 3 or 4 arguments, got {}",
            positional.len()
        ));
    }

    let policy: PolicyKind = positional[0].parse()?;
    let num_frames: usize = positional[1]
        .parse()
        .map_err(|_| format!("Invalid frame count: {}", positional[1]))?;
    if num_frames == 0 {
        return Err("Frame count must be positive".to_string());
    }

    Ok(Config {
        policy,
        num_frames,
        input_file: positional[2].clone(),
        output_file: positional.get(3).map(|s| s.to_string()),
        verbose,
    })
}

fn run(config: &Config) -> Result<()> {
    let references = read_reference_string(&config.input_file)?;

    if config.verbose {
        eprintln!("=== Page-Replacement Simulator ===");
        eprintln!("Policy:     {}", config.policy);
        eprintln!("Frames:     {}", config.num_frames);
        eprintln!("References: {}", references.len());
        eprintln!();
    }

    let max_page = references
        .iter()
        .max()
        .copied()
        .ok_or_else(|| anyhow!("Reference string is empty"))?;
    if max_page >= pagesim::DEFAULT_ADDRESS_SPACE_PAGES {
        return Err(anyhow!(
            "Page number {max_page} exceeds address space of {} pages",
            pagesim::DEFAULT_ADDRESS_SPACE_PAGES
        ));
    }

    let mut session = driver::new_session(config.policy, config.num_frames, &references);
    let result = driver::run_trace(&mut session, &references)
        .context("Simulation aborted on a consistency violation")?;

    if config.verbose {
        for ((&page, &outcome), &frame) in references
            .iter()
            .zip(result.outcomes.iter())
            .zip(result.frames.iter())
        {
            let tag = match outcome {
                Outcome::Hit => "hit  ",
                Outcome::Fault => "FAULT",
            };
            eprintln!("page {page:4} -> frame {frame:3}  [{tag}]");
        }
        eprintln!();
    }

    println!("References: {}", result.references());
    println!("Faults:     {}", result.faults);
    println!("Hits:       {}", result.hits());
    println!("Hit rate:   {:.2}%", result.hit_rate() * 100.0);
    println!("Evictions:  {}", result.evictions.len());

    if let Some(path) = &config.output_file {
        write_frame_trace(path, &result.frames)?;
        if config.verbose {
            eprintln!("Frame trace written to: {path}");
        }
    }

    Ok(())
}
