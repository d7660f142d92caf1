use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod config;
mod error;
mod inject;
mod logging;
mod manifest;
mod nullable;
mod render;
mod sort;
mod util;

use cli::{Command, GenerateArgs, InjectArgs, RootArgs};
use config::RenderConfig;
use inject::InjectRequest;
use manifest::Manifest;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    if let Err(err) = logging::init(config::debug_enabled(args.global.debug)) {
        eprintln!("warning: {err:#}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RootArgs) -> Result<()> {
    let config = RenderConfig::from_args(&args.global);
    tracing::debug!(?config, "resolved render config");
    match args.command {
        Command::Generate(args) => cmd_generate(args, &config),
        Command::Inject(args) => cmd_inject(args, &config),
    }
}

fn cmd_generate(args: GenerateArgs, config: &RenderConfig) -> Result<()> {
    let Some(path) = args.path else {
        return print_subcommand_help("generate");
    };
    let manifest = load_manifest(&path, config)?;
    let document = render::formatter(config).document(&manifest)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    stdout.flush()?;
    Ok(())
}

fn cmd_inject(args: InjectArgs, config: &RenderConfig) -> Result<()> {
    let Some(path) = args.path else {
        return print_subcommand_help("inject");
    };
    let manifest = load_manifest(&path, config)?;
    let formatter = render::formatter(config);
    let request = InjectRequest {
        host_path: &args.file,
        dry_run: args.dry_run,
    };
    let mut stdout = std::io::stdout().lock();
    inject::inject(&request, &manifest, formatter.as_ref(), &mut stdout)
}

fn load_manifest(path: &Path, config: &RenderConfig) -> Result<Manifest> {
    let mut manifest = manifest::load(path)?;
    tracing::debug!(kind = ?manifest.kind(), path = %path.display(), "loaded manifest");
    sort::sort_manifest(&mut manifest, config.sort);
    Ok(manifest)
}

/// A subcommand without its manifest path prints usage and succeeds.
fn print_subcommand_help(name: &str) -> Result<()> {
    let mut root = RootArgs::command();
    root.build();
    if let Some(subcommand) = root.find_subcommand_mut(name) {
        subcommand.print_help()?;
    }
    Ok(())
}
