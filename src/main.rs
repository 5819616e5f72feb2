use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use gridnote::Config;
use gridnote::session::Session;

#[derive(Parser, Debug)]
#[command(name = "gridnote")]
#[command(version, about = "Grid-paper note-taking shell with ink tools and undo/redo")]
struct Cli {
    /// Run an interactive note session on stdin
    #[arg(long, short = 'i', action = ArgAction::SetTrue)]
    interactive: bool,

    /// Run session commands from a script file
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write a documented default config to ~/.config/gridnote/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        Config::create_default_file()?;
        println!(
            "Created default config at {}",
            Config::get_config_path()?.display()
        );
        return Ok(());
    }

    if let Some(path) = cli.script {
        let config = Config::load()?;
        let mut session = Session::new(&config);
        let file =
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        log::info!("Running script {}", path.display());
        session.run(BufReader::new(file), &mut io::stdout().lock())?;
    } else if cli.interactive {
        let config = Config::load()?;
        let mut session = Session::new(&config);
        log::info!("Starting note session");
        log::info!("Type 'help' for commands, 'quit' to leave");
        session.run(io::stdin().lock(), &mut io::stdout().lock())?;
        log::info!("Session closed");
    } else {
        // No flags: show usage
        println!("gridnote: grid-paper note-taking shell with ink tools and undo/redo");
        println!();
        println!("Usage:");
        println!("  gridnote --interactive    Run an interactive note session on stdin");
        println!("  gridnote --script FILE    Run session commands from a file");
        println!("  gridnote --init-config    Write a documented default config file");
        println!("  gridnote --help           Show help");
        println!();
        println!("Session commands:");
        println!("  pen <color> [width], eraser, swatch <n>, width <n>,");
        println!("  stroke x,y x,y ..., scroll <dy>, undo, redo, state, help, quit");
    }

    Ok(())
}
