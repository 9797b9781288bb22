use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};

use university_manager::config::ShellConfig;
use university_manager::logging;
use university_manager::prompt::{LinePrompt, TerminalPrompt};
use university_manager::shell::Shell;

#[derive(Parser)]
#[command(name = "ums")]
#[command(author = "University Manager Contributors")]
#[command(version = "0.1.0")]
#[command(about = "University Manager - students, teachers and courses", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    #[arg(long, value_name = "TEXT", help = "Title shown above the menu")]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ShellConfig::new()
        .with_title(cli.title)
        .with_color(!cli.no_color)
        .with_verbose(cli.verbose);

    logging::init_logging(config.verbose, config.color)?;
    config.apply_color();

    let stdout = io::stdout();
    if io::stdin().is_terminal() {
        Shell::new(TerminalPrompt::new(), stdout.lock(), config).run()?;
    } else {
        let prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
        Shell::new(prompt, stdout.lock(), config).run()?;
    }

    Ok(())
}
