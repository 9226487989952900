pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use core::{
    engine::SiteEngine,
    html::HtmlFormatter,
    pipeline::SitePipeline,
    renderer::{render, RenderOptions},
};
pub use domain::model::Portfolio;
pub use domain::page::Page;
pub use utils::clock::{FixedClock, SystemClock};
pub use utils::error::{Result, SiteError};
