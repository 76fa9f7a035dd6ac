// ==========================================
// 鞋类库存调拨系统 - 调拨单工作簿生成
// ==========================================
// 职责: 调拨方案 → 每库位一个工作表的 .xlsx 文件
// ==========================================
// 表名: 库位 " - " 分隔符后缀,替换路径不安全字符,
//       截断到工作表名 31 字符上限
// ==========================================

use crate::domain::transfer::TransferRecord;
use crate::engine::orchestrator::TransferPlan;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// 输出表列,顺序固定
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "From Store",
    "To Store",
    "Brand",
    "Matrix",
    "Manufacturer SKU",
    "Size",
    "Width",
    "Color",
    "Quantity to Transfer",
    "Level",
];

// ==========================================
// ExportError - 导出错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("工作簿写入失败: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

// ==========================================
// TransferWorkbookWriter - 调拨单工作簿生成器
// ==========================================
pub struct TransferWorkbookWriter;

impl TransferWorkbookWriter {
    pub fn new() -> Self {
        Self
    }

    /// 写出调拨方案
    ///
    /// # 参数
    /// - plan: 调拨方案(表按库位全集顺序,空表也写出)
    /// - path: 输出文件路径
    pub fn write(&self, plan: &TransferPlan, path: &Path) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();

        for sheet in &plan.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(Self::sheet_name(&sheet.location))?;

            for (col, header) in OUTPUT_COLUMNS.iter().enumerate() {
                worksheet.write_string(0, col as u16, *header)?;
            }
            for (idx, record) in sheet.records.iter().enumerate() {
                Self::write_record(worksheet, (idx + 1) as u32, record)?;
            }

            // 冻结表头行
            worksheet.set_freeze_panes(1, 0)?;
        }

        workbook.save(path)?;
        info!(path = %path.display(), sheet_count = plan.sheets.len(), "调拨单已写出");
        Ok(())
    }

    fn write_record(
        worksheet: &mut rust_xlsxwriter::Worksheet,
        row: u32,
        record: &TransferRecord,
    ) -> Result<(), ExportError> {
        worksheet.write_string(row, 0, &record.from_store)?;
        worksheet.write_string(row, 1, &record.to_store)?;
        worksheet.write_string(row, 2, &record.brand)?;
        worksheet.write_string(row, 3, &record.matrix)?;
        worksheet.write_string(row, 4, &record.manufacturer_sku)?;
        worksheet.write_string(row, 5, &record.size)?;
        worksheet.write_string(row, 6, &record.width)?;
        worksheet.write_string(row, 7, &record.color)?;
        worksheet.write_number(row, 8, record.quantity as f64)?;
        worksheet.write_string(row, 9, record.level.as_str())?;
        Ok(())
    }

    /// 库位名 → 工作表名
    ///
    /// 取最后一个 " - " 后缀;无分隔符时用全名
    pub fn sheet_name(location: &str) -> String {
        let suffix = location
            .rsplit(" - ")
            .next()
            .unwrap_or(location);
        suffix
            .chars()
            .map(|c| match c {
                '/' | '\\' | '?' | '*' | '[' | ']' | ':' => '-',
                other => other,
            })
            .take(31)
            .collect()
    }

    /// 输出文件名: Footwear_Transfer_<YYYY-MM-DD>.xlsx
    pub fn output_file_name(date: NaiveDate) -> String {
        format!("Footwear_Transfer_{}.xlsx", date.format("%Y-%m-%d"))
    }

    /// 默认输出路径: 输入文件所在目录下的当日文件名
    pub fn default_output_path(input: &Path, date: NaiveDate) -> PathBuf {
        let dir = input.parent().unwrap_or_else(|| Path::new("."));
        dir.join(Self::output_file_name(date))
    }
}

impl Default for TransferWorkbookWriter {
    fn default() -> Self {
        Self::new()
    }
}
