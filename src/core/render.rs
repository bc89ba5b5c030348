use crate::domain::model::{
    DailyDrawRecord, DrawSummary, OutputRow, TableNames, DRAW_SEQUENCE, MAIN_NUMBER_COUNT,
    NUMBERS_PER_DRAW,
};
use crate::utils::error::{Result, ScriptError};
use chrono::NaiveDate;

/// 將開獎記錄轉成完整的交易式 SQL 匯入腳本。
///
/// 輸出逐字元固定：每列以 `,` 結尾，最後一列以 `;` 結尾，行與行之間以 `\n`
/// 連接，結尾不加換行。任何一筆記錄格式錯誤都會整體失敗，不產生部分輸出。
pub fn render(records: &[DailyDrawRecord], tables: &TableNames) -> Result<String> {
    let summary = summarize(records)?;
    let rows = render_rows(records)?;

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header(&summary, tables));

    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        let terminator = if i < last { ',' } else { ';' };
        lines.push(format!("{}{}", row.to_sql_tuple(), terminator));
    }

    lines.push(footer(tables));

    Ok(lines.join("\n"))
}

/// 依輸入順序展開每筆記錄為四列 (dm_2pm, dmp_2pm, dm_9pm, dmp_9pm)
pub fn render_rows(records: &[DailyDrawRecord]) -> Result<Vec<OutputRow>> {
    let mut rows = Vec::with_capacity(records.len() * DRAW_SEQUENCE.len());

    for (index, record) in records.iter().enumerate() {
        for (key, slot, game_type) in DRAW_SEQUENCE {
            let numbers = record.draw(key).ok_or_else(|| ScriptError::MissingDraw {
                index,
                date: record.date.clone(),
                key: key.to_string(),
            })?;

            if numbers.len() < NUMBERS_PER_DRAW {
                return Err(ScriptError::ShortDraw {
                    index,
                    date: record.date.clone(),
                    key: key.to_string(),
                    found: numbers.len(),
                    expected: NUMBERS_PER_DRAW,
                });
            }

            let main_numbers = numbers[..MAIN_NUMBER_COUNT]
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");

            rows.push(OutputRow {
                timestamp: format!("{} {}:00+00", record.date, slot.time()),
                label: format!("{}-{}", record.date, slot.time()),
                game_type,
                main_numbers,
                bonus_number: numbers[MAIN_NUMBER_COUNT].to_string(),
            });
        }
    }

    Ok(rows)
}

pub fn summarize(records: &[DailyDrawRecord]) -> Result<DrawSummary> {
    let (first, last) = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ScriptError::EmptyInput),
    };

    Ok(DrawSummary {
        record_count: records.len(),
        draw_count: records.len() * DRAW_SEQUENCE.len(),
        date_from: last.date.clone(),
        date_to: first.date.clone(),
    })
}

/// 檢查記錄是否由新到舊排列。任何日期無法解析時回傳 None。
pub fn is_newest_first(records: &[DailyDrawRecord]) -> Option<bool> {
    let dates = records
        .iter()
        .map(|r| NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").ok())
        .collect::<Option<Vec<_>>>()?;

    Some(dates.windows(2).all(|pair| pair[0] >= pair[1]))
}

fn header(summary: &DrawSummary, tables: &TableNames) -> String {
    format!(
        r#"-- IE_DAILY_MILLION and IE_DAILY_MILLION_PLUS Data Import
-- Total draws: {records} days x 4 draws = {draws} draws
-- Date range: {from} to {to}
-- Format: 6 numbers (1-39) + Bonus (1-39)
-- Schedule: Daily at 14:00 and 21:00 Irish time

BEGIN;

CREATE TEMP TABLE {staging} (
    draw_uuid UUID DEFAULT uuid_generate_v4(),
    draw_date TIMESTAMPTZ NOT NULL,
    draw_label VARCHAR(255) NOT NULL,
    game_type_name VARCHAR(255) NOT NULL,
    winning_number VARCHAR(255) NOT NULL,
    sec_winning_number VARCHAR(255) NOT NULL
);

INSERT INTO {staging} (draw_date, draw_label, game_type_name, winning_number, sec_winning_number) VALUES"#,
        records = summary.record_count,
        draws = summary.draw_count,
        from = summary.date_from,
        to = summary.date_to,
        staging = tables.staging,
    )
}

fn footer(tables: &TableNames) -> String {
    format!(
        r#"
INSERT INTO {draws} (id, draw_date, draw_label, external_draw_id, game_type_name, created_at, updated_at)
SELECT draw_uuid, draw_date, draw_label, NULL, game_type_name, NOW(), NOW()
FROM {staging};

INSERT INTO {results} (draw_id, win_class, winning_number, sec_winning_number, created_at, updated_at)
SELECT draw_uuid, NULL, winning_number, sec_winning_number, NOW(), NOW()
FROM {staging};

DROP TABLE {staging};

COMMIT;"#,
        draws = tables.draws,
        results = tables.results,
        staging = tables.staging,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(date: &str, base: u64) -> DailyDrawRecord {
        let draw = |offset: u64| json!((0..7).map(|i| base + offset + i).collect::<Vec<_>>());
        serde_json::from_value(json!({
            "date": date,
            "dm_2pm": draw(0),
            "dmp_2pm": draw(10),
            "dm_9pm": draw(20),
            "dmp_9pm": draw(30),
        }))
        .unwrap()
    }

    #[test]
    fn test_single_record_matches_reference_script() {
        let records: Vec<DailyDrawRecord> = serde_json::from_str(
            r#"[{"date":"2024-01-02","dm_2pm":[1,2,3,4,5,6,7],"dmp_2pm":[1,2,3,4,5,6,7],"dm_9pm":[1,2,3,4,5,6,7],"dmp_9pm":[1,2,3,4,5,6,7]}]"#,
        )
        .unwrap();

        let sql = render(&records, &TableNames::default()).unwrap();

        let expected = r#"-- IE_DAILY_MILLION and IE_DAILY_MILLION_PLUS Data Import
-- Total draws: 1 days x 4 draws = 4 draws
-- Date range: 2024-01-02 to 2024-01-02
-- Format: 6 numbers (1-39) + Bonus (1-39)
-- Schedule: Daily at 14:00 and 21:00 Irish time

BEGIN;

CREATE TEMP TABLE temp_draws (
    draw_uuid UUID DEFAULT uuid_generate_v4(),
    draw_date TIMESTAMPTZ NOT NULL,
    draw_label VARCHAR(255) NOT NULL,
    game_type_name VARCHAR(255) NOT NULL,
    winning_number VARCHAR(255) NOT NULL,
    sec_winning_number VARCHAR(255) NOT NULL
);

INSERT INTO temp_draws (draw_date, draw_label, game_type_name, winning_number, sec_winning_number) VALUES
    ('2024-01-02 14:00:00+00'::timestamptz, '2024-01-02-14:00', 'IE_DAILY_MILLION', '1,2,3,4,5,6', '7'),
    ('2024-01-02 14:00:00+00'::timestamptz, '2024-01-02-14:00', 'IE_DAILY_MILLION_PLUS', '1,2,3,4,5,6', '7'),
    ('2024-01-02 21:00:00+00'::timestamptz, '2024-01-02-21:00', 'IE_DAILY_MILLION', '1,2,3,4,5,6', '7'),
    ('2024-01-02 21:00:00+00'::timestamptz, '2024-01-02-21:00', 'IE_DAILY_MILLION_PLUS', '1,2,3,4,5,6', '7');

INSERT INTO lotto_draw (id, draw_date, draw_label, external_draw_id, game_type_name, created_at, updated_at)
SELECT draw_uuid, draw_date, draw_label, NULL, game_type_name, NOW(), NOW()
FROM temp_draws;

INSERT INTO lotto_draw_result (draw_id, win_class, winning_number, sec_winning_number, created_at, updated_at)
SELECT draw_uuid, NULL, winning_number, sec_winning_number, NOW(), NOW()
FROM temp_draws;

DROP TABLE temp_draws;

COMMIT;"#;

        assert_eq!(sql, expected);
    }

    #[test]
    fn test_rows_follow_fixed_sequence() {
        let records = vec![record("2024-03-02", 1), record("2024-03-01", 2)];
        let rows = render_rows(&records).unwrap();

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].main_numbers, "1,2,3,4,5,6");
        assert_eq!(rows[0].bonus_number, "7");
        assert_eq!(rows[1].main_numbers, "11,12,13,14,15,16");
        assert_eq!(rows[2].main_numbers, "21,22,23,24,25,26");
        assert_eq!(rows[3].main_numbers, "31,32,33,34,35,36");
        assert_eq!(rows[3].bonus_number, "37");
        assert_eq!(rows[4].label, "2024-03-01-14:00");
        assert_eq!(rows[6].timestamp, "2024-03-01 21:00:00+00");
        assert_eq!(rows[5].game_type.as_str(), "IE_DAILY_MILLION_PLUS");
    }

    #[test]
    fn test_extra_numbers_are_ignored() {
        let mut r = record("2024-03-02", 1);
        r.dm_2pm.push(serde_json::Number::from(99));
        let rows = render_rows(&[r]).unwrap();
        assert_eq!(rows[0].main_numbers, "1,2,3,4,5,6");
        assert_eq!(rows[0].bonus_number, "7");
    }

    #[test]
    fn test_short_draw_fails() {
        let mut r = record("2024-03-02", 1);
        r.dm_9pm.truncate(6);
        let err = render(&[r], &TableNames::default()).unwrap_err();
        match err {
            ScriptError::ShortDraw { key, found, .. } => {
                assert_eq!(key, "dm_9pm");
                assert_eq!(found, 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            render(&[], &TableNames::default()),
            Err(ScriptError::EmptyInput)
        ));
    }

    #[test]
    fn test_summary_uses_last_to_first() {
        let records = vec![
            record("2024-03-03", 1),
            record("2024-03-02", 1),
            record("2024-03-01", 1),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.draw_count, 12);
        assert_eq!(summary.date_from, "2024-03-01");
        assert_eq!(summary.date_to, "2024-03-03");
    }

    #[test]
    fn test_is_newest_first() {
        let ordered = vec![record("2024-03-02", 1), record("2024-03-01", 1)];
        let reversed = vec![record("2024-03-01", 1), record("2024-03-02", 1)];
        let unparsable = vec![record("yesterday", 1)];
        assert_eq!(is_newest_first(&ordered), Some(true));
        assert_eq!(is_newest_first(&reversed), Some(false));
        assert_eq!(is_newest_first(&unparsable), None);
    }

    #[test]
    fn test_custom_table_names() {
        let tables = TableNames {
            staging: "stage_dm".to_string(),
            draws: "public.draws".to_string(),
            results: "public.draw_results".to_string(),
        };
        let sql = render(&[record("2024-03-02", 1)], &tables).unwrap();
        assert!(sql.contains("CREATE TEMP TABLE stage_dm ("));
        assert!(sql.contains("INSERT INTO public.draws (id,"));
        assert!(sql.contains("INSERT INTO public.draw_results (draw_id,"));
        assert!(sql.ends_with("DROP TABLE stage_dm;\n\nCOMMIT;"));
    }
}
