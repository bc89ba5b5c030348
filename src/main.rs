use clap::error::ErrorKind;
use clap::Parser;
use daily_million_sql::utils::{logger, validation::Validate};
use daily_million_sql::{CliConfig, EtlEngine, LoadOutcome, LocalStorage, SqlScriptPipeline};

fn main() {
    let mut config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // 缺少必要參數時輸出用法並以 1 結束
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證配置
    if let Err(e) = config.load_script_config().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let dry_run = config.dry_run;
    let pipeline = SqlScriptPipeline::new(LocalStorage::new(), config);
    let engine = EtlEngine::new(pipeline);

    let result = if dry_run {
        engine.dry_run().map(|_| ())
    } else {
        engine.run().map(|outcome| {
            if let LoadOutcome::Written(path) = outcome {
                println!("SQL written to {}", path);
            }
        })
    };

    if let Err(e) = result {
        tracing::error!("❌ SQL generation failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
