use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use refract_site::site::{
    SiteConfig, DEFAULT_BIND_ADDR, DEFAULT_OUT_DIR, DEFAULT_STATIC_DIR, DEFAULT_TAGLINE,
    DEFAULT_TITLE,
};

#[derive(Debug, Parser)]
#[command(name = "refract-site")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve or export the Refract landing page")]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the landing page and static files
    Serve,
    /// Write the landing page and its stylesheet to the output directory
    Build {
        #[arg(long, env = "REFRACT_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct SiteArgs {
    /// Static asset root; icons are read from its `img/` directory
    #[arg(long, global = true, env = "REFRACT_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// Address the server listens on
    #[arg(long, global = true, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    #[arg(long, global = true, env = "REFRACT_SITE_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, global = true, env = "REFRACT_TAGLINE", default_value = DEFAULT_TAGLINE)]
    pub tagline: String,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    pub fn site_config(&self) -> SiteConfig {
        let mut config = SiteConfig {
            static_dir: self.site.static_dir.clone(),
            bind_addr: self.site.bind.clone(),
            title: self.site.title.clone(),
            tagline: self.site.tagline.clone(),
            ..SiteConfig::default()
        };

        if let Command::Build { out_dir } = self.command() {
            config.out_dir = out_dir;
        }

        config
    }
}
