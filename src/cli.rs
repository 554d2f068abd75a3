use crate::config::{Config, load_config};
use crate::layout::auto_layout;
use crate::model::FlowDocument;
use crate::validate::validate_flow;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "flowcanvas",
    version,
    about = "Flow canvas auto-layout (grid placement + collision resolution)"
)]
pub struct Args {
    /// Input flow document (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config file (JSON5, camelCase keys)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Validate the flow and exit without writing a layout
    #[arg(long = "check")]
    pub check: bool,

    /// Pretty-print the output document
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Override the relaxation pass budget
    #[arg(long = "max-iterations")]
    pub max_iterations: Option<i32>,

    /// Override the minimum overlap area that triggers displacement
    #[arg(long = "overlap-threshold")]
    pub overlap_threshold: Option<f32>,

    /// Override the spacing margin around every node
    #[arg(long = "margin")]
    pub margin: Option<f32>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let input = read_input(args.input.as_deref())?;
    let mut doc: FlowDocument = serde_json::from_str(&input)?;

    let issues = validate_flow(&doc);
    if args.check {
        for issue in &issues {
            eprintln!("{issue}");
        }
        if !issues.is_empty() {
            return Err(anyhow::anyhow!(
                "flow failed validation with {} issue(s)",
                issues.len()
            ));
        }
        return Ok(());
    }
    for issue in &issues {
        eprintln!("warning: {issue}");
    }

    doc.nodes = auto_layout(&doc, &config);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    write_output(&rendered, args.output.as_deref())?;
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(v) = args.max_iterations {
        config.resolve.max_iterations = v;
    }
    if let Some(v) = args.overlap_threshold {
        config.resolve.overlap_threshold = v;
    }
    if let Some(v) = args.margin {
        config.resolve.margin = v;
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(text.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
