use std::path::Path;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use modelconv::readers::mcm;
use modelconv::settings::Settings;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "modelconv")]
struct CliArgs {
    /// Model file to load (.mcm)
    input: String,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

/// Happens during setup
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Input file does not exist: {0}")]
    InputFileNonExistant(String),
    #[error("Unrecognized model format: {0}")]
    UnknownFormat(String),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    run(args)
}

fn run(args: CliArgs) -> Result<()> {
    let path = Path::new(&args.input);
    if !path.is_file() {
        return Err(CliError::InputFileNonExistant(args.input).into());
    }

    // check extension
    match path.extension().and_then(|x| x.to_str()) {
        Some(extension) if extension.eq_ignore_ascii_case("mcm") => {}
        _ => return Err(CliError::UnknownFormat(args.input).into()),
    }

    let settings = Settings {
        in_file: path.to_path_buf(),
    };
    let model = mcm::load_and_convert(&settings)?;

    info!(
        "Loaded model: {} meshes, {} materials, {} root nodes",
        model.meshes.len(),
        model.materials.len(),
        model.nodes.len()
    );

    Ok(())
}
