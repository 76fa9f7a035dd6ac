// ==========================================
// 鞋类库存调拨系统 - 字段映射器实现
// ==========================================
// 职责: 表头列校验 + 源字段 → 标准字段映射 + 类型转换
// ==========================================

use crate::domain::inventory::RawInventoryRecord;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

/// 必需列;缺任意一列在数据映射前即失败
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Store",
    "Matrix",
    "Manufacturer SKU",
    "Attribute 1",
    "Attribute 2",
    "Attribute 3",
    "Brand",
    "Quantity on Hand",
];

pub struct FieldMapper;

impl FieldMapper {
    /// 校验表头包含全部必需列
    ///
    /// # 返回
    /// - Err(MissingColumns): 一次性列出所有缺失列
    pub fn validate_headers(&self, headers: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !headers.iter().any(|h| h == *required))
            .map(|required| required.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns { missing })
        }
    }

    /// 单行映射为导入中间结构
    ///
    /// # 参数
    /// - row: 解析后的行(表头 → 原值)
    /// - row_number: 原始文件行号(表头为第 1 行)
    pub fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawInventoryRecord> {
        Ok(RawInventoryRecord {
            store: self.get_string(row, "Store"),
            matrix: self.get_string(row, "Matrix"),
            manufacturer_sku: self.get_string(row, "Manufacturer SKU"),
            size: self.get_string(row, "Attribute 1"),
            width: self.get_string(row, "Attribute 2"),
            color: self.get_string(row, "Attribute 3"),
            brand: self.get_string(row, "Brand"),
            quantity_on_hand: self.parse_quantity(row, "Quantity on Hand", row_number)?,
            row_number,
        })
    }

    /// 提取字符串字段,两端空白剔除;缺失视为空串
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// 解析在手数量;空值记 0,"3.0" 这类整值浮点写法可接受
    fn parse_quantity(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<i64> {
        let value = self.get_string(row, key);
        if value.is_empty() {
            return Ok(0);
        }

        if let Ok(quantity) = value.parse::<i64>() {
            return Ok(quantity);
        }
        match value.parse::<f64>() {
            Ok(quantity) if quantity.fract() == 0.0 => Ok(quantity as i64),
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            }),
        }
    }
}
