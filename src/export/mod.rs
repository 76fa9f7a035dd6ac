// ==========================================
// 鞋类库存调拨系统 - 导出层
// ==========================================
// 职责: 调拨方案的外部呈现(工作簿)
// ==========================================

pub mod workbook;

pub use workbook::{ExportError, TransferWorkbookWriter, OUTPUT_COLUMNS};
