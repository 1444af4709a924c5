use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use fences::{HtmlRenderer, parse};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(cli_config: Option<&Path>, file: &Option<PathBuf>) -> io::Result<fences::Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = fences::config::load(cli_config, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn parse_input(input: &str, cfg: fences::Config) -> io::Result<fences::SyntaxNode> {
    parse(input, Some(cfg)).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let tree = parse_input(&input, cfg)?;
            println!("{:#?}", tree);
            Ok(())
        }
        Commands::Render { file, output } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let tree = parse_input(&input, cfg.clone())?;
            let html = HtmlRenderer::new(cfg).render(&tree);

            match output {
                Some(path) => {
                    fs::write(&path, html)?;
                    log::info!("Wrote {}", path.display());
                }
                None => print!("{html}"),
            }
            Ok(())
        }
    }
}
