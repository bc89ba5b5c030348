use crate::core::{DrawSummary, LoadOutcome, Pipeline};
use crate::core::render::{render_rows, summarize};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("🚀 Starting SQL generation");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("📥 Extracted {} daily records", records.len());

        // Transform
        let script = self.pipeline.transform(records)?;
        log_summary(&script.summary);

        // Load
        let outcome = self.pipeline.load(script)?;
        match &outcome {
            LoadOutcome::Written(path) => tracing::info!("📁 SQL written to {}", path),
            LoadOutcome::Printed => tracing::info!("📤 SQL printed to stdout"),
        }

        Ok(outcome)
    }

    /// 只讀取並統計，不產生任何輸出
    pub fn dry_run(&self) -> Result<DrawSummary> {
        tracing::info!("🔍 DRY RUN MODE - No SQL will be written");

        let records = self.pipeline.extract()?;
        let summary = summarize(&records)?;
        // 仍然檢查每筆記錄的格式
        render_rows(&records)?;
        log_summary(&summary);

        Ok(summary)
    }
}

fn log_summary(summary: &DrawSummary) {
    tracing::info!(
        "🔄 {} days x 4 draws = {} draws ({} to {})",
        summary.record_count,
        summary.draw_count,
        summary.date_from,
        summary.date_to
    );
}
