pub mod etl;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{DailyDrawRecord, DrawSummary, OutputRow, RenderedScript, TableNames};
pub use crate::domain::ports::{ConfigProvider, LoadOutcome, Pipeline, Storage};
pub use crate::utils::error::Result;
