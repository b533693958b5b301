pub mod cli;
pub mod model;
pub mod module;
pub mod util;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    if !args.input.exists() {
        eprintln!("In-Valid file: {}", args.input.display());
        return Ok(());
    }

    // 1. ── Load ───────────────────────────────────────────────────────
    println!("Opening \"{}\"", args.input.display());
    let project = model::Project::load(&args.input, args.output.as_deref())
        .with_context(|| format!("Loading {}", args.input.display()))?;

    // 2. ── Generate ───────────────────────────────────────────────────
    let path = writer::cmake::write(&project).with_context(|| "Writing the build script")?;

    // 3. ── Report ─────────────────────────────────────────────────────
    if args.verbose {
        print!("{project}");
        for (name, module) in project
            .resolve_modules()
            .with_context(|| "Resolving modules")?
        {
            if module.is_resolved() {
                print!("{module}");
            } else {
                println!("Module {name} not found on disk");
            }
        }
    }
    println!("Created \"{}\"", path.display());

    Ok(())
}
