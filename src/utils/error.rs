use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input contains no draw records")]
    EmptyInput,

    #[error("Record {index} ({date}) is missing draw '{key}'")]
    MissingDraw {
        index: usize,
        date: String,
        key: String,
    },

    #[error("Record {index} ({date}) draw '{key}' has {found} numbers, expected at least {expected}")]
    ShortDraw {
        index: usize,
        date: String,
        key: String,
        found: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

impl ScriptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScriptError::IoError(_) => ErrorCategory::Io,
            ScriptError::JsonError(_)
            | ScriptError::EmptyInput
            | ScriptError::MissingDraw { .. }
            | ScriptError::ShortDraw { .. } => ErrorCategory::Input,
            ScriptError::ConfigError { .. } | ScriptError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::IoError(e) => format!("無法讀取或寫入檔案: {}", e),
            ScriptError::JsonError(e) => format!("輸入 JSON 格式錯誤: {}", e),
            ScriptError::ConfigError { message } => format!("配置錯誤: {}", message),
            ScriptError::InvalidConfigValueError { field, reason, .. } => {
                format!("配置欄位 '{}' 無效: {}", field, reason)
            }
            ScriptError::EmptyInput => "輸入檔案沒有任何開獎記錄".to_string(),
            ScriptError::MissingDraw { date, key, .. } => {
                format!("{} 的記錄缺少 '{}' 開獎結果", date, key)
            }
            ScriptError::ShortDraw {
                date, key, found, ..
            } => format!("{} 的 '{}' 只有 {} 個號碼", date, key, found),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Input => {
                "Each record needs a date plus dm_2pm, dmp_2pm, dm_9pm and dmp_9pm arrays of 7 numbers"
            }
            ErrorCategory::Configuration => "Fix the TOML configuration file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
