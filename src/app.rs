//! Application orchestrator.
//! Loads/merges config, initializes logging, then runs the rename walk.

use anyhow::Result;
use tracing::{debug, error};

use renawin::cli::Args;
use renawin::config::{config_path, load_settings, CONFIG_ENV};
use renawin::output as out;
use renawin::{Config, RenawinError};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Defaults < config file < CLI flags
    let mut cfg = Config::default();
    let loaded_from = match load_settings()? {
        Some((path, settings)) => {
            settings.apply(&mut cfg);
            Some(path)
        }
        None => None,
    };
    args.apply_overrides(&mut cfg);

    // Hold the guard until the end so buffered file logs are flushed.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!(?args, config_file = ?loaded_from, "Starting renawin");

    match renawin::run(&cfg) {
        Ok(summary) => {
            if summary.failed > 0 {
                out::print_warn(&format!(
                    "{} of {} entries could not be renamed; see log for details",
                    summary.failed, summary.visited
                ));
            }
            Ok(())
        }
        Err(e) => {
            if let Some(re) = e.downcast_ref::<RenawinError>() {
                error!(code = re.code(), kind = re.kind(), "{re}");
            } else {
                error!(error = ?e, "Rename run failed");
            }
            Err(e)
        }
    }
}

fn print_config_location() {
    match config_path() {
        Some((p, true)) => {
            out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}\n", p.display()));
            out::print_info(&format!("To override, unset {CONFIG_ENV} or set it to another file."));
        }
        Some((p, false)) => {
            out::print_info(&format!("Default renawin config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info(
                    "No config file exists there; built-in defaults are used. Example:\n\n<config>\n  <replacement>-</replacement>\n  <start_index>2</start_index>\n  <log_level>normal</log_level>\n</config>\n",
                );
            }
        }
        None => out::print_error("Could not determine a config path for this platform"),
    }
}
