// src/lib.rs

pub mod bar;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod widget;

use anyhow::Result;
use tracing::{debug, info};

use crate::bar::Bar;
use crate::cli::CliArgs;
use crate::config::{default_config_path, load_and_validate, ConfigFile};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - widget construction
/// - the host loop (or a single pass in `--once` mode)
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let cfg = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    info!(
        config = %config_path.display(),
        widgets = cfg.widgets.len(),
        "config loaded"
    );

    let mut bar = Bar::from_config(&cfg);

    if args.once {
        let line = bar.run_once().await;
        println!("{line}");
        return Ok(());
    }

    bar.run(std::io::stdout()).await?;
    Ok(())
}

/// Simple dry-run output: print bar settings and widget commands.
fn print_dry_run(cfg: &ConfigFile) {
    println!("shellbar dry-run");
    println!("  bar.interval = {:?}", cfg.bar.interval);
    println!("  bar.separator = {:?}", cfg.bar.separator);
    println!("  bar.color = {}", cfg.bar.color);
    println!();

    println!("widgets ({}):", cfg.widgets.len());
    for (name, widget) in cfg.widgets.iter() {
        println!("  - {name}");
        println!("      command: {}", widget.command);
        println!("      interval: {:?}", widget.interval);
        if widget.run_async {
            println!("      async: true");
        }
    }

    debug!("dry-run complete (no execution)");
}
