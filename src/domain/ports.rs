use crate::domain::model::{DailyDrawRecord, RenderedScript, TableNames};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    /// 未指定時將腳本印到 stdout
    fn output_path(&self) -> Option<&str>;
    fn table_names(&self) -> &TableNames;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<DailyDrawRecord>>;
    fn transform(&self, data: Vec<DailyDrawRecord>) -> Result<RenderedScript>;
    fn load(&self, script: RenderedScript) -> Result<LoadOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Written(String),
    Printed,
}
