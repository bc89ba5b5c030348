use crate::core::render::{is_newest_first, render, summarize};
use crate::core::{ConfigProvider, DailyDrawRecord, LoadOutcome, Pipeline, RenderedScript, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct SqlScriptPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SqlScriptPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SqlScriptPipeline<S, C> {
    fn extract(&self) -> Result<Vec<DailyDrawRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading draw records from: {}", path);

        let raw = self.storage.read_file(path)?;
        let records: Vec<DailyDrawRecord> = serde_json::from_slice(&raw)?;

        tracing::debug!("Decoded {} daily records ({} bytes)", records.len(), raw.len());
        Ok(records)
    }

    fn transform(&self, data: Vec<DailyDrawRecord>) -> Result<RenderedScript> {
        let summary = summarize(&data)?;

        // 只警告，不重新排序；表頭日期範圍仍取最後一筆到第一筆
        match is_newest_first(&data) {
            Some(false) => tracing::warn!(
                "⚠️ Records are not ordered newest-first; header date range {} to {} may be misleading",
                summary.date_from,
                summary.date_to
            ),
            None => tracing::debug!("Could not parse every date, skipping ordering check"),
            Some(true) => {}
        }

        let sql = render(&data, self.config.table_names())?;
        tracing::debug!("Rendered {} draws into {} bytes of SQL", summary.draw_count, sql.len());

        Ok(RenderedScript { summary, sql })
    }

    fn load(&self, script: RenderedScript) -> Result<LoadOutcome> {
        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, script.sql.as_bytes())?;
                tracing::debug!("SQL script saved to {}", path);
                Ok(LoadOutcome::Written(path.to_string()))
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", script.sql)?;
                stdout.flush()?;
                Ok(LoadOutcome::Printed)
            }
        }
    }
}
