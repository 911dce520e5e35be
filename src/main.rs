#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::fs::{self, File};
use std::io::{self, prelude::*};
use std::path::PathBuf;
use std::process;

use chrono::Utc;
use itertools::Itertools;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use openair_gen::airspaces::{self, MODULES};
use openair_gen::error::Result;

#[derive(StructOpt)]
#[structopt(name = "openair-gen", about = "Generates OpenAIR airspace definitions")]
enum Args {
    /// Generates the OpenAIR instructions for a given airspace
    #[structopt(name = "generate")]
    Generate {
        /// Name of the instruction module, see `list`
        #[structopt(short = "i", long = "instruction")]
        instruction: String,
        /// Directory to write `<instruction>-airspaces.txt` into instead of stdout
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// Lists all available instruction modules
    #[structopt(name = "list")]
    List,
}

fn generate(name: &str, output: Option<PathBuf>) -> Result<()> {
    let module = airspaces::find(name)?;

    info!("Generating {}...", module.name);
    let lines = module.render(&Utc::now())?;

    match output {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            let path = dir.join(format!("{}-airspaces.txt", module.name));
            let mut file = File::create(&path)?;
            file.write_all(lines.iter().join("\n").as_bytes())?;
            info!("Airspace instructions written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}

fn list() {
    for m in MODULES {
        println!("{:<28}{}", m.name, m.description);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match Args::from_args() {
        Args::Generate {
            instruction,
            output,
        } => generate(&instruction, output),
        Args::List => {
            list();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
