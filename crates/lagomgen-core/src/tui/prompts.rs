//! Charm-style CLI prompts using cliclack

use crate::context::TemplateContext;
use crate::ident;
use crate::templates::{copy_tree, DiskIo, Renderer};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// Default answers, matching the generator's historical prompts
const DEFAULT_NAME: &str = "hello";
const DEFAULT_ORGANIZATION: &str = "com.example";
const DEFAULT_VERSION: &str = "1.0-SNAPSHOT";
const DEFAULT_LAGOM_VERSION: &str = "1.4.6";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory containing the project templates
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Name of the application
    pub name: Option<String>,

    /// Reverse domain name of the owning organization
    pub organization: Option<String>,

    /// Initial version number for the application
    pub app_version: Option<String>,

    /// Lagom framework version the generated build pins
    pub lagom_version: Option<String>,

    /// Pre-built JSON context blob merged over the answered fields
    pub context: Option<String>,

    /// JSON object of miscellaneous options, merged last
    pub options: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("lagomgen")?;

    // Step 1: Locate the template tree
    let template_dir = resolve_template_dir(&args)?;

    // Step 2: Collect answers (flags and --yes suppress individual prompts)
    let context = build_context(&args)?;

    // Step 3: Select destination directory
    let project_dir = select_directory(&args, &context)?;

    // Step 4: Materialize the project
    create_project(&template_dir, &project_dir, &context).await?;

    // Step 5: Show next steps
    print_next_steps(&project_dir)?;

    Ok(())
}

fn resolve_template_dir(args: &CreateArgs) -> Result<PathBuf> {
    let dir = args
        .template_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("templates"));

    if !dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", dir.display());
    }

    cliclack::log::info(format!("Using templates from {}", dir.display()))?;
    Ok(dir)
}

/// Answer one field from its flag, the default (with `--yes`), or a prompt
fn prompt_or_flag(flag: &Option<String>, yes: bool, message: &str, default: &str) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.clone());
    }
    if yes {
        return Ok(default.to_string());
    }

    let input: String = cliclack::input(message)
        .placeholder(default)
        .default_input(default)
        .interact()?;
    Ok(input)
}

/// Build the template context from answers, derived identifiers, and the
/// optional JSON override blobs (later merges win)
fn build_context(args: &CreateArgs) -> Result<TemplateContext> {
    let name = prompt_or_flag(&args.name, args.yes, "Name of the application", DEFAULT_NAME)?;
    let organization = prompt_or_flag(
        &args.organization,
        args.yes,
        "Reverse domain name for this application",
        DEFAULT_ORGANIZATION,
    )?;
    let version = prompt_or_flag(
        &args.app_version,
        args.yes,
        "Initial version number for this application",
        DEFAULT_VERSION,
    )?;
    let lagom_version = prompt_or_flag(
        &args.lagom_version,
        args.yes,
        "The version number of Lagom",
        DEFAULT_LAGOM_VERSION,
    )?;

    let mut context = TemplateContext::new()
        .with("appName", ident::sanitize_alpha_num(Some(&name)))
        .with("appNameLower", ident::sanitize_alpha_num_lower(Some(&name)))
        .with("name", name)
        .with("organization", organization)
        .with("version", version)
        .with("lagomVersion", lagom_version);

    if let Some(blob) = &args.context {
        context
            .merge_json(blob)
            .context("Invalid --context blob")?;
    }
    if let Some(blob) = &args.options {
        context
            .merge_json(blob)
            .context("Invalid --options blob")?;
    }

    Ok(context)
}

fn select_directory(args: &CreateArgs, context: &TemplateContext) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let default_dir = context.get("appNameLower").unwrap_or("app").to_string();

    // Use --directory flag if provided
    let path = if let Some(dir) = &args.directory {
        let p = if dir.is_absolute() {
            dir.clone()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", p.display()))?;
        p
    } else if args.yes {
        current_dir.join(&default_dir)
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(default_dir.as_str())
            .default_input(default_dir.as_str())
            .interact()?;

        let p = PathBuf::from(&input);
        if p.is_absolute() {
            p
        } else {
            current_dir.join(p)
        }
    };

    // Warn if directory exists and has files
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                // Auto-confirm with --yes flag
                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(true)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

async fn create_project(
    template_dir: &Path,
    project_dir: &Path,
    context: &TemplateContext,
) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let renderer = Renderer::new();
    let report = match copy_tree(&DiskIo, &renderer, template_dir, project_dir, context).await {
        Ok(report) => report,
        Err(err) => {
            spinner.stop("Project creation failed");
            return Err(err);
        }
    };

    spinner.stop(format!(
        "Created {} file(s) in {}",
        report.written.len(),
        project_dir.display()
    ));

    if !report.skipped.is_empty() {
        cliclack::log::info(format!(
            "Skipped {} fragment file(s)",
            report.skipped.len()
        ))?;
    }
    for warning in &report.warnings {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn print_next_steps(project_dir: &Path) -> Result<()> {
    let mut steps = Vec::new();

    let current = std::env::current_dir().ok();
    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    steps.push("sbt runAll".to_string());

    cliclack::outro(format!("Project ready. Next steps:\n  {}", steps.join("\n  ")))?;
    Ok(())
}
