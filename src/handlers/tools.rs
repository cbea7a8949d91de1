use crate::{
    catalog::{Catalog, ToolEntry},
    cli::OutputFormat,
    config::types::Config,
    error::{ReconKitError, Result},
    installer::{GoInstallRunner, ToolInstaller, ToolPresence, detect_tool, resolve_destination},
};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn handle_install(
    tools: Vec<String>,
    gobin: Option<PathBuf>,
    dry_run: bool,
    strict: bool,
    yes: bool,
    config: &Config,
) -> Result<()> {
    let catalog = build_catalog(config)?.select(&tools)?;
    // Resolved once; every install in the run shares it
    let destination = resolve_destination(gobin.as_deref(), config.install.gobin.as_deref())?;

    println!("🚀 Starting tool installation...");
    println!("📁 Binaries will be installed to: {}", destination.display());

    if catalog.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    if dry_run {
        println!("\n🔍 Dry run: tools that would be installed:");
        for tool in catalog.entries() {
            println!("  📦 {} ({})", tool.name, tool.source);
        }
        return Ok(());
    }

    if !yes && !confirm_installation(catalog.len())? {
        println!("Installation cancelled.");
        return Ok(());
    }

    let runner = GoInstallRunner;
    let installer = ToolInstaller::new(&runner, &destination);
    let outcomes = installer.install_all(catalog.entries());

    let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
    if failed == 0 {
        println!("\n✅ All {} tools installed.", outcomes.len());
    } else {
        println!("\n❌ {} of {} tools failed to install:", failed, outcomes.len());
        for outcome in outcomes.iter().filter(|o| !o.succeeded()) {
            println!("  • {}", outcome.tool.name);
        }
    }
    print_setup_instructions(&destination);

    if (strict || config.install.strict) && failed > 0 {
        return Err(ReconKitError::InstallsFailed {
            failed,
            total: outcomes.len(),
        });
    }

    Ok(())
}

pub fn handle_list(format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = build_catalog(config)?;

    match format {
        OutputFormat::Table => {
            println!("📚 Reconnaissance tool catalog ({} tools)", catalog.len());
            println!("{}", "=".repeat(50));
            for tool in catalog.entries() {
                println!("  {} {}", tool.name.green().bold(), tool.source.dimmed());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(catalog.entries()).unwrap()
            );
        }
    }

    Ok(())
}

pub fn handle_status(
    gobin: Option<PathBuf>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let catalog = build_catalog(config)?;
    let destination = resolve_destination(gobin.as_deref(), config.install.gobin.as_deref())?;

    let report: Vec<ToolPresence> = catalog
        .entries()
        .iter()
        .map(|tool| detect_tool(&tool.name, &destination))
        .collect();

    match format {
        OutputFormat::Table => display_status_table(&report, &destination),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }

    Ok(())
}

// Helper functions

fn build_catalog(config: &Config) -> Result<Catalog> {
    let extra = config
        .tools
        .iter()
        .map(|t| ToolEntry::new(t.name.clone(), t.source.clone()))
        .collect();
    Catalog::builtin().extended_with(extra)
}

fn confirm_installation(count: usize) -> Result<bool> {
    use std::io::{self, Write};
    print!("🔧 Install {count} tools with `go install`? [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase().starts_with('y'))
}

fn print_setup_instructions(destination: &Path) {
    println!(
        "\n💡 Make sure {} is in your PATH to use the tools globally:",
        destination.display()
    );
    println!("   export PATH=\"{}:$PATH\"", destination.display());
}

fn display_status_table(report: &[ToolPresence], destination: &Path) {
    println!("🔧 Tool Status ({})", destination.display());
    println!("{}", "=".repeat(50));

    for presence in report {
        if presence.installed {
            match &presence.path {
                Some(path) => println!("  ✅ {} at {}", presence.name.green(), path.display()),
                None => println!("  ✅ {} (on PATH)", presence.name.green()),
            }
        } else {
            println!(
                "  ❌ {} missing - run `reconkit install --tool {}`",
                presence.name.red(),
                presence.name
            );
        }
    }

    let installed = report.iter().filter(|p| p.installed).count();
    println!("\n{}/{} tools installed", installed, report.len());
}
