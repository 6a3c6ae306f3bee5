use crate::error::AppError;
use crate::models::record::Record;
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

/// 固定表头，列顺序不可变
pub const COLUMNS: [&str; 4] = ["timestamp", "specialty", "text", "relation"];

/// 读取整个 Excel 文件（第一个工作表，跳过表头行）
pub fn load_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Storage("Excel 文件中没有工作表".to_string()))??;

    let mut records = Vec::new();
    for row in range.rows().skip(1) {
        let cell = |i: usize| row.get(i).map(|c| c.to_string()).unwrap_or_default();
        records.push(Record {
            timestamp: cell(0),
            specialty: cell(1),
            text: cell(2),
            relation: cell(3),
        });
    }
    Ok(records)
}

/// 追加一行：读全量 -> 内存拼接 -> 重写全量。
/// 文件不存在时带表头新建。返回追加后的总行数（不含表头）。
/// 调用方需持有 AppState::write_lock，本函数自身不做并发保护
pub fn append_record(path: &Path, record: &Record) -> Result<usize, AppError> {
    // 确保目标目录存在
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut records = if path.exists() {
        load_records(path)?
    } else {
        Vec::new()
    };
    records.push(record.clone());

    write_store(path, &records)?;
    Ok(records.len())
}

fn write_store(path: &Path, records: &[Record]) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, rec.timestamp.as_str())?;
        sheet.write_string(row, 1, rec.specialty.as_str())?;
        sheet.write_string(row, 2, rec.text.as_str())?;
        sheet.write_string(row, 3, rec.relation.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}
