use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::extract::CourseRecord;

pub const REPORT_HEADERS: [&str; 5] = [
    "Название курса",
    "Язык курса",
    "Дата начала",
    "Продолжительность",
    "Рейтинг",
];

/// Writes the report workbook: a single sheet with one header row, then one
/// row per record in input order. An existing file at `path` is overwritten.
pub fn write_report(path: &str, records: &[CourseRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        if let Some(name) = &record.name {
            worksheet.write_string(row, 0, name)?;
        }
        if let Some(lang) = &record.lang {
            worksheet.write_string(row, 1, lang)?;
        }
        if let Some(start) = &record.start {
            worksheet.write_string(row, 2, start)?;
        }
        worksheet.write_number(row, 3, record.len as f64)?;
        if let Some(rating) = &record.rating {
            worksheet.write_string(row, 4, rating)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
