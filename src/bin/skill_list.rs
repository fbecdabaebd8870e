//! Parse one skill list and print it as a JSON array.
//!
//! Useful for checking how raw input will be read before reconciling it:
//! `--dedupe` keeps the first spelling of each skill, `--sort` additionally
//! orders the result the way the master catalog is ordered.

use anyhow::{Context, Result, anyhow, bail};
use skillmatch::runtime::init_tracing;
use skillmatch::{dedupe, parse_skills, sort_skills};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let raw = match &args.file {
        Some(path) => {
            if !path.is_file() {
                bail!("input file not found: {}", path.display());
            }
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let mut skills = parse_skills(&raw);
    if args.dedupe || args.sort {
        skills = dedupe(&skills);
    }
    if args.sort {
        sort_skills(&mut skills);
    }

    println!("{}", serde_json::to_string(&skills)?);
    Ok(())
}

struct CliArgs {
    file: Option<PathBuf>,
    dedupe: bool,
    sort: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut file: Option<PathBuf> = None;
        let mut dedupe = false;
        let mut sort = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--file" => {
                    let Some(path) = args.next() else {
                        bail!("missing value for --file");
                    };
                    if file.is_some() {
                        bail!("--file may only be provided once");
                    }
                    file = Some(PathBuf::from(path));
                }
                "--stdin" => {}
                "--dedupe" => dedupe = true,
                "--sort" => sort = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs { file, dedupe, sort })
    }
}

fn usage() -> &'static str {
    "Usage: skill-list [--file PATH|--stdin] [--dedupe] [--sort]\n\
Parses a skill list (newline/comma/semicolon separated or a JSON array) and prints it as a JSON array.\n\
--dedupe keeps the first spelling of each skill; --sort dedupes and sorts like the master catalog.\n"
}
