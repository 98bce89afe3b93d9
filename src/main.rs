//! arithkit main: subcommand dispatch; no subcommand prints help.
use std::path::Path;

use clap::Parser; // trait import enables ArithCli::parse()

use arithkit::cli::{ArithCli, Command, ConfigAction};
use arithkit::commands;
use arithkit::config::{resolve_config_path, Settings};
use arithkit::debug_log;

/// Load the effective settings and apply the colour switch.
fn load_settings(config: Option<&Path>, no_color: bool) -> anyhow::Result<Settings> {
    let settings = Settings::load(config)?;
    if no_color || !settings.display.color {
        colored::control::set_override(false);
    }
    debug_log!("effective settings: {settings:?}");
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = ArithCli::parse();

    if args.debug {
        arithkit::core::debug::enable();
    }
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.config.as_deref();
    match args.cmd {
        Some(Command::Calc { op, a, b, strict }) => {
            load_settings(config, args.no_color)?;
            commands::calc::main(op.into(), &a, b.as_deref(), strict)
        }

        Some(Command::Demo) => {
            load_settings(config, args.no_color)?;
            commands::demo::main()
        }

        Some(Command::Guess { min, max, attempts, seed }) => {
            let mut game = load_settings(config, args.no_color)?.game;
            if let Some(v) = min {
                game.min = v;
            }
            if let Some(v) = max {
                game.max = v;
            }
            if let Some(v) = attempts {
                game.max_attempts = v;
            }
            commands::guess::main(game, seed)
        }

        Some(Command::Describe { values, fill, json }) => {
            load_settings(config, args.no_color)?;
            commands::describe::main(&values, fill.into(), json)
        }

        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&load_settings(config, args.no_color)?),
            // the file may not exist yet, so nothing is loaded
            ConfigAction::Init { force } => {
                commands::config::init(resolve_config_path(&args.config), force)
            }
        },

        None => {
            use clap::CommandFactory;
            ArithCli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}
