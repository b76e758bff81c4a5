//! Command implementations for `ec2-inspect`.
//!
//! Everything the binary does goes through [`run`] so tests can drive it
//! with in-memory readers and writers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ec2_model::{MemberKind, MemberSchema, SHAPE_NAMES};
use ec2_types::FieldType;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ec2-inspect")]
#[command(about = "Inspect EC2 model shapes")]
pub struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every known shape
    Shapes {
        /// Only list request shapes
        #[arg(long)]
        requests: bool,
    },
    /// Print the members of a shape
    Schema {
        shape: String,

        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a shape from JSON and print its diagnostic form
    Show {
        shape: String,

        /// JSON file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the rendering as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a request with DryRun set
    DryRun {
        shape: String,

        /// JSON file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Runs one command, reading shape JSON from `input` when no file is given.
pub fn run(command: &Command, input: &mut impl Read, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Shapes { requests } => list_shapes(*requests, out),
        Command::Schema { shape, json } => print_schema(shape, *json, out),
        Command::Show { shape, input: path, json } => {
            let body = read_input(path.as_ref(), input)?;
            let rendered = ec2_model::render_json(shape, &body)
                .with_context(|| format!("Failed to parse {shape}"))?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&rendered)?)?;
            } else {
                writeln!(out, "{}", rendered.display)?;
                writeln!(out, "present: {}", rendered.present.join(", "))?;
            }
            Ok(())
        }
        Command::DryRun { shape, input: path } => {
            let body = read_input(path.as_ref(), input)?;
            let request = ec2_model::dry_run_json(shape, &body)
                .with_context(|| format!("Failed to build dry run of {shape}"))?;
            writeln!(out, "{request}")?;
            Ok(())
        }
    }
}

fn list_shapes(requests_only: bool, out: &mut impl Write) -> Result<()> {
    for name in SHAPE_NAMES {
        if requests_only && ec2_model::request_info(name)?.is_none() {
            continue;
        }
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn print_schema(shape: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let schema = ec2_model::schema_of(shape)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        return Ok(());
    }

    match ec2_model::request_info(shape)? {
        Some(info) => writeln!(out, "{shape} ({} -> {})", info.action, info.response)?,
        None => writeln!(out, "{shape}")?,
    }
    let width = schema.members.iter().map(|m| m.name.len()).max().unwrap_or(0);
    for member in schema.members {
        let label = type_label(member);
        if member.allowed_values.is_empty() {
            writeln!(out, "  {:<width$}  {label}", member.name)?;
        } else {
            writeln!(
                out,
                "  {:<width$}  {label}  [{}]",
                member.name,
                member.allowed_values.join(" | ")
            )?;
        }
    }
    Ok(())
}

fn type_label(member: &MemberSchema) -> String {
    let element = match member.field_type {
        FieldType::Enum | FieldType::Structure => member.target.to_string(),
        other => other.as_str().to_string(),
    };
    match member.kind {
        MemberKind::Scalar => element,
        MemberKind::List => format!("list<{element}>"),
    }
}

fn read_input(path: Option<&PathBuf>, stdin: &mut impl Read) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading shape JSON from {:?}", path);
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            debug!("Reading shape JSON from stdin");
            let mut body = String::new();
            stdin.read_to_string(&mut body).context("Failed to read stdin")?;
            Ok(body)
        }
    }
}
