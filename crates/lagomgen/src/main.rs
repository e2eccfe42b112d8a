//! lagomgen CLI - Project scaffolding for Lagom microservices

use anyhow::Result;
use clap::{Parser, Subcommand};
use lagomgen_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lagomgen")]
#[command(about = "CLI for scaffolding Lagom projects from templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Lagom project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Directory containing the project templates
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Name of the application
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reverse domain name for this application
    #[arg(short, long)]
    pub organization: Option<String>,

    /// Initial version number for this application
    #[arg(long = "app-version")]
    pub app_version: Option<String>,

    /// The version number of Lagom
    #[arg(long = "lagom-version")]
    pub lagom_version: Option<String>,

    /// Pre-built JSON context blob (object of field overrides)
    #[arg(long)]
    pub context: Option<String>,

    /// JSON object of miscellaneous options, merged after --context
    #[arg(long)]
    pub options: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            name: args.name,
            organization: args.organization,
            app_version: args.app_version,
            lagom_version: args.lagom_version,
            context: args.context,
            options: args.options,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Handle subcommands
    match args.command {
        Some(Command::Create(create_args)) => {
            let result = lagomgen_core::run(create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = lagomgen_core::run(CreateArgs::default()).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
