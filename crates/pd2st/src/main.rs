use crate::prelude::*;
use clap::Parser;

mod client;
mod config;
mod convert;
mod error;
mod prelude;
#[cfg(test)]
mod testing;
mod web;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn pandas data-processing snippets into single-page Streamlit apps"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Secrets file holding the `api_key` entry
    #[clap(
        long,
        env = "PD2ST_SECRETS",
        global = true,
        default_value = ".streamlit/secrets.toml"
    )]
    secrets: std::path::PathBuf,

    /// API key for the chat-completion endpoint; takes precedence over the secrets file
    #[clap(long, env = "PD2ST_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[clap(
        long,
        env = "PD2ST_BASE_URL",
        global = true,
        hide = true,
        default_value = pd2st_core::convert::chat::BASE_URL
    )]
    base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "PD2ST_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the converter web page
    Serve(crate::web::App),

    /// Convert a pandas snippet from the terminal
    Convert(crate::convert::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let settings = config::Settings::load(&app.global)?;

    match app.command {
        SubCommands::Serve(sub_app) => crate::web::run(sub_app, app.global, settings).await,
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global, settings).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
