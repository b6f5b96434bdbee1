//! Foodlog CLI Application
//!
//! Interactive terminal front end for the food entry wizard.

mod args;
mod prompts;
mod renderer;
mod session;
mod view;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands, FormatServingArgs};
use clap::Parser;
use foodlog_core::{format_serving_size, HttpFoodServiceBuilder, WizardBuilder};
use log::info;
use prompts::Prompter;
use renderer::TerminalRenderer;
use session::Session;
use view::TerminalView;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        timeout_secs,
        session_cookie,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Commands::FormatServing(FormatServingArgs {
            quantity,
            unit,
            weight,
        })) => {
            renderer.render(&format_serving_size(
                Some(quantity),
                Some(&unit),
                weight,
            ));
            Ok(())
        }
        Some(Commands::Add) | None => {
            let service = HttpFoodServiceBuilder::new()
                .with_base_url(&base_url)
                .with_timeout(timeout_secs.map(Duration::from_secs))
                .with_session_cookie(session_cookie)
                .build()
                .context("Failed to initialize food service")?;

            info!("Foodlog started against {base_url}");

            let wizard = WizardBuilder::new(service)
                .with_view(TerminalView::new(renderer))
                .build();
            Session::new(wizard, Prompter::new())
                .run()
                .await
                .context("Food entry session failed")
        }
    }
}
