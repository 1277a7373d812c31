use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::domain::entities::market_data::MarketData;

/// Prefixed to the output so spreadsheet tools decode CJK headers correctly.
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Maps a record to its spreadsheet representation. Export always runs over
/// the full filtered result, not the visible page.
pub trait ExportRow {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

pub fn write_csv_with_bom<W: Write, R: ExportRow>(writer: &mut W, rows: &[R]) -> Result<()> {
    writer
        .write_all(UTF8_BOM)
        .context("failed to write utf-8 bom")?;

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer
        .write_record(R::headers())
        .context("failed to write csv header row")?;
    for row in rows {
        csv_writer
            .write_record(row.to_row())
            .context("failed to write csv row")?;
    }
    csv_writer.flush().context("failed to flush csv output")?;

    Ok(())
}

pub fn export_csv_file<R: ExportRow>(path: &Path, rows: &[R]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create export file: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_csv_with_bom(&mut writer, rows)
}

pub fn default_export_file_name(prefix: &str) -> String {
    format!("{prefix}-{}.csv", chrono::Local::now().format("%Y-%m-%d"))
}

impl ExportRow for MarketData {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "股票代码",
            "交易日期",
            "开盘价",
            "收盘价",
            "最高价",
            "最低价",
            "成交量",
            "成交额",
            "涨跌额",
            "涨跌幅",
            "换手率",
            "昨收价",
            "创建时间",
            "更新时间",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.thscode.clone(),
            self.trade_date.clone(),
            self.open.to_string(),
            self.close.to_string(),
            self.high.to_string(),
            self.low.to_string(),
            self.volume.to_string(),
            self.amount.to_string(),
            self.change_amount.to_string(),
            self.change_ratio.to_string(),
            self.turnover_ratio.to_string(),
            self.pre_close.to_string(),
            self.create_time.clone(),
            self.update_time.clone(),
        ]
    }
}
