//! Reconcile master/passed/failed skill lists and print the report.
//!
//! Each list comes from a file (or `-` for stdin); missing lists are empty.
//! Output is a human summary by default or the schema-validated JSON report
//! with `--format json` (or `SKILLMATCH_FORMAT=json`).

use anyhow::{Context, Result, anyhow, bail};
use skillmatch::demo::{DEMO_FAILED, DEMO_MASTER, DEMO_PASSED};
use skillmatch::runtime::{OutputFormat, format_from_env, init_tracing};
use skillmatch::{reconcile, report_to_validated_json};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args_os().skip(1))?;
    let format = match args.format {
        Some(format) => format,
        None => format_from_env()?.unwrap_or_default(),
    };

    let inputs = args.inputs.read()?;
    debug!(format = format.as_str(), "reconciling skill lists");
    let report = reconcile(&inputs.master, &inputs.passed, &inputs.failed);

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => {
            let value = report_to_validated_json(&report)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn from_arg(raw: &str) -> Self {
        if raw == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(raw))
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Inputs {
    Demo,
    Sources {
        master: Option<InputSource>,
        passed: Option<InputSource>,
        failed: Option<InputSource>,
    },
}

struct RawInputs {
    master: String,
    passed: String,
    failed: String,
}

impl Inputs {
    fn read(&self) -> Result<RawInputs> {
        match self {
            Inputs::Demo => Ok(RawInputs {
                master: DEMO_MASTER.to_string(),
                passed: DEMO_PASSED.to_string(),
                failed: DEMO_FAILED.to_string(),
            }),
            Inputs::Sources {
                master,
                passed,
                failed,
            } => Ok(RawInputs {
                master: read_optional(master.as_ref())?,
                passed: read_optional(passed.as_ref())?,
                failed: read_optional(failed.as_ref())?,
            }),
        }
    }
}

fn read_optional(source: Option<&InputSource>) -> Result<String> {
    source.map_or_else(|| Ok(String::new()), InputSource::read)
}

#[derive(Debug)]
struct CliArgs {
    inputs: Inputs,
    format: Option<OutputFormat>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Self> {
        let mut master: Option<InputSource> = None;
        let mut passed: Option<InputSource> = None;
        let mut failed: Option<InputSource> = None;
        let mut demo = false;
        let mut format: Option<OutputFormat> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--master" => set_source(&mut master, &mut args, "--master")?,
                "--passed" => set_source(&mut passed, &mut args, "--passed")?,
                "--failed" => set_source(&mut failed, &mut args, "--failed")?,
                "--demo" => demo = true,
                "--format" => {
                    let raw = next_value(&mut args, "--format")?;
                    format = Some(OutputFormat::parse(&raw)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        let sources = [&master, &passed, &failed];
        if demo {
            if sources.iter().any(|source| source.is_some()) {
                bail!("--demo cannot be combined with --master/--passed/--failed");
            }
            return Ok(CliArgs {
                inputs: Inputs::Demo,
                format,
            });
        }

        let stdin_count = sources
            .iter()
            .filter(|source| matches!(source, Some(InputSource::Stdin)))
            .count();
        if stdin_count > 1 {
            bail!("at most one input may be read from stdin ('-')");
        }

        Ok(CliArgs {
            inputs: Inputs::Sources {
                master,
                passed,
                failed,
            },
            format,
        })
    }
}

fn set_source(
    slot: &mut Option<InputSource>,
    args: &mut impl Iterator<Item = OsString>,
    flag: &str,
) -> Result<()> {
    let raw = next_value(args, flag)?;
    if slot.is_some() {
        bail!("{flag} may only be provided once");
    }
    *slot = Some(InputSource::from_arg(&raw));
    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: skill-report [--master PATH] [--passed PATH] [--failed PATH] [--demo] [--format text|json]\n\
Reads the master catalog and the student's passed/failed skill lists (PATH '-' reads stdin; omitted lists are empty),\n\
then prints canonical passed/failed skills, entries outside the catalog, recommended skills, and coverage.\n\
Lists may be one skill per line, comma/semicolon separated, or a JSON array.\n\
Environment: SKILLMATCH_FORMAT sets the default format; SKILLMATCH_LOG sets the log filter.\n"
}

fn print_usage() {
    print!("{}", usage());
}
