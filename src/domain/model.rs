use crate::utils::error::{Result, ScriptError};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// 每期開獎號碼數：6 個主號 + 1 個特別號
pub const NUMBERS_PER_DRAW: usize = 7;
pub const MAIN_NUMBER_COUNT: usize = 6;

/// 一天的開獎記錄，包含 14:00 與 21:00 兩個時段、兩種玩法共四組號碼
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDrawRecord {
    pub date: String,
    pub dm_2pm: Vec<Number>,
    pub dmp_2pm: Vec<Number>,
    pub dm_9pm: Vec<Number>,
    pub dmp_9pm: Vec<Number>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    IeDailyMillion,
    IeDailyMillionPlus,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::IeDailyMillion => "IE_DAILY_MILLION",
            GameType::IeDailyMillionPlus => "IE_DAILY_MILLION_PLUS",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawSlot {
    Afternoon,
    Evening,
}

impl DrawSlot {
    /// 開獎時間 (HH:MM)，時間戳記以 +00 寫出
    pub fn time(&self) -> &'static str {
        match self {
            DrawSlot::Afternoon => "14:00",
            DrawSlot::Evening => "21:00",
        }
    }
}

/// 每筆記錄展開的固定順序
pub const DRAW_SEQUENCE: [(&str, DrawSlot, GameType); 4] = [
    ("dm_2pm", DrawSlot::Afternoon, GameType::IeDailyMillion),
    ("dmp_2pm", DrawSlot::Afternoon, GameType::IeDailyMillionPlus),
    ("dm_9pm", DrawSlot::Evening, GameType::IeDailyMillion),
    ("dmp_9pm", DrawSlot::Evening, GameType::IeDailyMillionPlus),
];

impl DailyDrawRecord {
    /// 從未型別化的 JSON 物件建立記錄；缺少的開獎鍵回報 MissingDraw
    pub fn from_value(index: usize, value: &serde_json::Value) -> Result<Self> {
        let date = value
            .get("date")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ScriptError::MissingDraw {
                index,
                date: "<unknown>".to_string(),
                key: "date".to_string(),
            })?
            .to_string();

        let draw = |key: &str| -> Result<Vec<Number>> {
            let raw = value.get(key).ok_or_else(|| ScriptError::MissingDraw {
                index,
                date: date.clone(),
                key: key.to_string(),
            })?;
            Ok(serde_json::from_value(raw.clone())?)
        };

        Ok(Self {
            dm_2pm: draw("dm_2pm")?,
            dmp_2pm: draw("dmp_2pm")?,
            dm_9pm: draw("dm_9pm")?,
            dmp_9pm: draw("dmp_9pm")?,
            date,
        })
    }

    pub fn draw(&self, key: &str) -> Option<&[Number]> {
        match key {
            "dm_2pm" => Some(&self.dm_2pm),
            "dmp_2pm" => Some(&self.dmp_2pm),
            "dm_9pm" => Some(&self.dm_9pm),
            "dmp_9pm" => Some(&self.dmp_9pm),
            _ => None,
        }
    }
}

/// SQL VALUES 中的一列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub timestamp: String,
    pub label: String,
    pub game_type: GameType,
    pub main_numbers: String,
    pub bonus_number: String,
}

impl OutputRow {
    pub fn to_sql_tuple(&self) -> String {
        format!(
            "    ('{}'::timestamptz, '{}', '{}', '{}', '{}')",
            self.timestamp, self.label, self.game_type, self.main_numbers, self.bonus_number
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub record_count: usize,
    pub draw_count: usize,
    /// 輸入假設由新到舊排列，所以起日取最後一筆、迄日取第一筆
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone)]
pub struct RenderedScript {
    pub summary: DrawSummary,
    pub sql: String,
}

/// 腳本引用的三張表；預設值對應 lotto schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNames {
    pub staging: String,
    pub draws: String,
    pub results: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            staging: "temp_draws".to_string(),
            draws: "lotto_draw".to_string(),
            results: "lotto_draw_result".to_string(),
        }
    }
}
