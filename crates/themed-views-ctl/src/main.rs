//! `themed-views-ctl`: render and inspect themed Tera views from the command line.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use themed_views::{ViewResult, ViewsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "themed-views-ctl",
    version,
    about = "Render and inspect themed Tera views",
    styles = output::clap_styles()
)]
struct Cli {
    /// Config file (default: ./themed-views.toml, then ~/.config/themed-views.toml)
    #[arg(long, global = true, env = "THEMED_VIEWS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render a template to stdout
    Render {
        /// Template name without extension (e.g. `blog/index`)
        template: String,

        /// Theme to switch to before rendering
        #[arg(long)]
        theme: Option<String>,

        /// Layout exposed to templates as `_layout`
        #[arg(long)]
        layout: Option<String>,

        /// Active module whose views sit between the theme and the base views
        #[arg(long)]
        module: Option<String>,

        /// JSON file with an object of template variables
        #[arg(long)]
        data: Option<PathBuf>,

        /// Template variable as key=value; JSON values are parsed, anything else is a string
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Route as controller/action or module/controller/action, exposed as `route` and `url`
        #[arg(long)]
        route: Option<String>,

        /// Base URL used to build `url`
        #[arg(long, default_value = "/")]
        base_url: String,
    },

    /// Print the resolved template search paths
    Paths {
        #[arg(long)]
        theme: Option<String>,

        #[arg(long)]
        module: Option<String>,
    },

    /// List themes under the theme directory
    Themes,

    /// List modules under the configured module locations
    Modules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("themed_views=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::handle_command(cli.command, config) {
        output::error(e);
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> ViewResult<ViewsConfig> {
    match path {
        Some(path) => themed_views::config::load_from_path(path),
        None => ViewsConfig::load(),
    }
}
