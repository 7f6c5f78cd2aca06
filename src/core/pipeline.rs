use crate::core::{ConfigProvider, FeeSummary, Pipeline, ReturnRecord, Storage, TransformResult};
use crate::utils::dates::{parse_date, US_DATE};
use crate::utils::error::{FeesError, Result};
use indexmap::IndexMap;

/// Fee charged per day a returned book is overdue. No cap.
const LATE_FEE_PER_DAY: f64 = 0.25;

const REPORT_HEADER: [&str; 2] = ["patron_id", "late_fees"];

pub struct FeesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FeesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| FeesError::SchemaError {
            column: column.to_string(),
        })
}

fn field<'a>(row: &'a csv::StringRecord, index: usize, column: &str) -> Result<&'a str> {
    row.get(index).ok_or_else(|| FeesError::SchemaError {
        column: column.to_string(),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FeesPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ReturnRecord>> {
        tracing::debug!("Reading returns log: {}", self.config.input_file());
        let raw = self.storage.read_file(self.config.input_file()).await?;

        // flexible: 欄位不足的列在這裡轉成 SchemaError，而不是 CSV 長度錯誤
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(raw.as_slice());

        let headers = reader.headers()?.clone();
        let patron_index = column_index(&headers, "patron_id")?;
        let returned_index = column_index(&headers, "date_returned")?;
        let due_index = column_index(&headers, "date_due")?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(ReturnRecord {
                patron_id: field(&row, patron_index, "patron_id")?.to_string(),
                date_returned: field(&row, returned_index, "date_returned")?.to_string(),
                date_due: field(&row, due_index, "date_due")?.to_string(),
            });
        }

        tracing::debug!("Extracted {} return records", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<ReturnRecord>) -> Result<TransformResult> {
        // 以首次出現順序累計每位讀者的滯納金
        let mut ledger: IndexMap<String, f64> = IndexMap::new();

        for record in data {
            let date_returned = parse_date(&record.date_returned, US_DATE)?;
            let date_due = parse_date(&record.date_due, US_DATE)?;

            // 提前歸還不會產生負費用
            let late_days = (date_returned - date_due).num_days().max(0);
            let late_fee = late_days as f64 * LATE_FEE_PER_DAY;

            *ledger.entry(record.patron_id).or_insert(0.0) += late_fee;
        }

        let summaries: Vec<FeeSummary> = ledger
            .into_iter()
            .map(|(patron_id, fee)| FeeSummary {
                patron_id,
                late_fees: format!("{:.2}", fee),
            })
            .collect();

        // 手動寫表頭，空報表也要有表頭列
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(REPORT_HEADER)?;
        for summary in &summaries {
            writer.serialize(summary)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| FeesError::ProcessingError {
                message: format!("failed to flush report writer: {}", e),
            })?;
        let csv_output = String::from_utf8(bytes).map_err(|e| FeesError::ProcessingError {
            message: format!("report is not valid UTF-8: {}", e),
        })?;

        Ok(TransformResult {
            summaries,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_file = self.config.output_file();

        tracing::debug!(
            "Writing fee report ({} rows) to {}",
            result.summaries.len(),
            output_file
        );
        self.storage
            .write_file(output_file, result.csv_output.as_bytes())
            .await?;

        Ok(self.storage.resolve(output_file))
    }
}
