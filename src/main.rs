//! facilitate CLI - helpers for operating ECS clusters
//!
//! Usage: facilitate ecs exec [OPTIONS] <CONTAINER> <COMMAND>...

mod cli;
mod commands;
mod interrupt;
mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use facilitate::{Config, FacilitateError};

use cli::{Cli, Commands, EcsCommands};
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is needed for color decisions, so load errors are printed plainly
    let (config, warnings) = match Config::load_layered() {
        Ok(loaded) => loaded,
        Err(err) => {
            logging::init_logging(cli.verbose, false);
            ui::error::print_error(&err.into(), false, false);
            return ExitCode::FAILURE;
        }
    };

    let ui = UiContext::new(cli.verbose, cli.color, cli.no_animation, &config.output);
    logging::init_logging(cli.verbose, ui.color);
    interrupt::install_handler();
    ui::output::print_config_warnings(&warnings, ui.color, ui.unicode);

    match run(&cli, &config, &ui) {
        Ok(code) => ExitCode::from(exit_byte(code)),
        Err(err) => match err.downcast_ref::<FacilitateError>() {
            Some(FacilitateError::Aborted) => {
                ui::error::print_aborted(ui.color);
                ExitCode::SUCCESS
            }
            _ => {
                ui::error::print_error(&err, ui.color, ui.unicode);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli, config: &Config, ui: &UiContext) -> Result<i32> {
    match &cli.command {
        Commands::Ecs(EcsCommands::Exec(args)) => commands::ecs::cmd_exec(args, config, ui),
    }
}

fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_passes_through_byte_range() {
        assert_eq!(exit_byte(0), 0);
        assert_eq!(exit_byte(130), 130);
        assert_eq!(exit_byte(-1), 1);
        assert_eq!(exit_byte(300), 1);
    }
}
