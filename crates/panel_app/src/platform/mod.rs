mod app;
pub(crate) mod config;
mod effects;
mod input;
mod ui;

use std::io;

use anyhow::Context;
use log::LevelFilter;
use panel_core::ERROR_PREFIX;
use panel_engine::load_selected_file;
use panel_logging::panel_info;

use crate::cli::{Cli, Command, SubmitArgs};
use app::Panel;
use effects::EffectRunner;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config(cli.config.as_deref())?.with_cli_overrides(&cli);

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    panel_logging::initialize(cli.log.into(), level, &config.log_file);
    panel_info!("{}", config.startup_summary(cli.config.as_deref()));

    match cli.command {
        Command::Panel => {
            let runner = EffectRunner::new(config.submit_settings())
                .context("failed to start submission engine")?;
            app::run_interactive(runner)
        }
        Command::Submit(args) => {
            let runner = EffectRunner::new(config.submit_settings())
                .context("failed to start submission engine")?;
            run_once(runner, args)
        }
        Command::PrintConfig => {
            println!("{}", config.to_ron()?);
            Ok(())
        }
    }
}

/// Drive the panel through a single submit and wait for its outcome.
fn run_once(runner: EffectRunner, args: SubmitArgs) -> anyhow::Result<()> {
    let mut panel = Panel::new(runner, io::stdout());
    panel.handle_input(input::InputCommand::SetOutputUrl(args.output_url))?;
    panel.handle_input(input::InputCommand::SetImageUrl(args.image_url))?;
    if let Some(path) = args.file {
        let file = load_selected_file(&path)?;
        panel.dispatch(panel_core::Msg::FileSelected(file))?;
    }
    panel.handle_input(input::InputCommand::Submit)?;
    panel.wait_until_idle()?;

    let view = panel.view();
    if view.result_text.starts_with(ERROR_PREFIX) {
        anyhow::bail!("correction request failed");
    }
    Ok(())
}
