#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod edition;
mod error;
mod logging;
mod lookup;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Resolve weekly edition dates, issue numbers and audio archive URLs"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Year-scoped edition index URL ({0} is replaced with the year)
    #[clap(
        long,
        env = "ECONAUDIO_INDEX_URL",
        global = true,
        default_value = econaudio_core::lookup::DEFAULT_INDEX_URL
    )]
    index_url: String,

    /// HTTP timeout in seconds
    #[clap(long, env = "ECONAUDIO_TIMEOUT", global = true, default_value = "15")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "ECONAUDIO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Resolve the weekly edition covering a date
    Get(crate::edition::get::GetOptions),

    /// List every edition published in a year
    List(crate::edition::list::ListOptions),

    /// Show the most recent editions from the remote index
    Recent(crate::edition::recent::RecentOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    crate::logging::init(app.global.verbose);

    match app.command {
        SubCommands::Get(options) => crate::edition::get::run(options, app.global).await,
        SubCommands::List(options) => crate::edition::list::run(options, app.global).await,
        SubCommands::Recent(options) => crate::edition::recent::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
