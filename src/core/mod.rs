pub mod engine;
pub mod html;
pub mod pipeline;
pub mod renderer;

pub use crate::domain::model::Portfolio;
pub use crate::domain::page::Page;
pub use crate::domain::ports::{
    Clock, ConfigProvider, OutputFormat, Pipeline, RenderResult, Storage,
};
pub use crate::utils::error::Result;
