// ==========================================
// 鞋类库存调拨系统 - 库存领域模型
// ==========================================
// 依据: 输入表结构 - 每行一个(门店, 变体)在手数量
// ==========================================

use crate::domain::keys::{FamilyKey, VariantKey};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductAttributes - 商品描述属性
// ==========================================
// 用途: 原样带入输出表,不参与匹配(键构造除外)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub brand: String,            // 品牌
    pub matrix: String,           // 商品矩阵
    pub manufacturer_sku: String, // 厂商 SKU
    pub size: String,             // Attribute 1(尺码)
    pub width: String,            // Attribute 2(宽度)
    pub color: String,            // Attribute 3(颜色)
}

// ==========================================
// RawInventoryRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物(文件解析 → 字段映射 → 此结构)
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInventoryRecord {
    pub store: String,            // 库位(门店或仓库)
    pub matrix: String,           // 商品矩阵
    pub manufacturer_sku: String, // 厂商 SKU
    pub size: String,             // Attribute 1
    pub width: String,            // Attribute 2
    pub color: String,            // Attribute 3
    pub brand: String,            // 品牌
    pub quantity_on_hand: i64,    // 在手数量(源系统可能出现负数)

    // 元信息
    pub row_number: usize, // 原始文件行号(用于错误报告)
}

impl RawInventoryRecord {
    pub fn family_key(&self) -> FamilyKey {
        FamilyKey::new(&self.matrix, &self.width, &self.size)
    }

    pub fn variant_key(&self) -> VariantKey {
        VariantKey::new(self.family_key(), &self.color)
    }

    pub fn attributes(&self) -> ProductAttributes {
        ProductAttributes {
            brand: self.brand.clone(),
            matrix: self.matrix.clone(),
            manufacturer_sku: self.manufacturer_sku.clone(),
            size: self.size.clone(),
            width: self.width.clone(),
            color: self.color.clone(),
        }
    }
}

// ==========================================
// InventoryRecord - 合并后的库存记录
// ==========================================
// 同一(库位, 变体)的多行输入在导入层求和为一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub store: String,
    pub variant: VariantKey,
    pub attributes: ProductAttributes,
    pub quantity_on_hand: i64,
}

// ==========================================
// CatalogItem - 商品目录条目
// ==========================================
// 输入中观察到的每个去重变体一条,按变体键排序,
// 作为两级填补遍历的确定性顺序
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub variant: VariantKey,
    pub attributes: ProductAttributes,
}

impl CatalogItem {
    pub fn family(&self) -> &FamilyKey {
        self.variant.family()
    }

    /// 从合并后的库存记录构建商品目录
    ///
    /// 去重键: 变体键;属性取首条出现的记录
    pub fn catalog_from_records(records: &[InventoryRecord]) -> Vec<CatalogItem> {
        let mut seen: std::collections::BTreeMap<VariantKey, ProductAttributes> =
            std::collections::BTreeMap::new();
        for record in records {
            seen.entry(record.variant.clone())
                .or_insert_with(|| record.attributes.clone());
        }
        seen.into_iter()
            .map(|(variant, attributes)| CatalogItem { variant, attributes })
            .collect()
    }
}

// ==========================================
// ImportSummary - 导入批次摘要
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: String,             // 批次 ID(UUID)
    pub file_name: Option<String>,    // 源文件名
    pub total_rows: usize,            // 解析到的数据行数
    pub merged_records: usize,        // 合并后的(库位, 变体)记录数
    pub unknown_location_rows: usize, // 库位不在配置范围内的行数
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(store: &str, matrix: &str, color: &str, qty: i64) -> InventoryRecord {
        let raw = RawInventoryRecord {
            store: store.to_string(),
            matrix: matrix.to_string(),
            manufacturer_sku: "SKU-1".to_string(),
            size: "10".to_string(),
            width: "D".to_string(),
            color: color.to_string(),
            brand: "Asics".to_string(),
            quantity_on_hand: qty,
            row_number: 2,
        };
        InventoryRecord {
            store: raw.store.clone(),
            variant: raw.variant_key(),
            attributes: raw.attributes(),
            quantity_on_hand: raw.quantity_on_hand,
        }
    }

    #[test]
    fn test_key_construction_from_raw_record() {
        let raw = RawInventoryRecord {
            store: "Store A".to_string(),
            matrix: "Gel-Kayano 31".to_string(),
            manufacturer_sku: "1011B867".to_string(),
            size: "10".to_string(),
            width: "D".to_string(),
            color: "Black".to_string(),
            brand: "Asics".to_string(),
            quantity_on_hand: 3,
            row_number: 5,
        };

        assert_eq!(raw.family_key().to_string(), "Gel-Kayano 31 - D - 10");
        assert_eq!(
            raw.variant_key().to_string(),
            "Gel-Kayano 31 - D - 10 - Black"
        );
    }

    #[test]
    fn test_catalog_dedupes_across_stores_and_sorts() {
        let records = vec![
            record("Store B", "ZoomFly", "White", 2),
            record("Store A", "ZoomFly", "White", 1),
            record("Store A", "Clifton 9", "Black", 4),
        ];

        let catalog = CatalogItem::catalog_from_records(&records);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].variant.family.matrix, "Clifton 9");
        assert_eq!(catalog[1].variant.family.matrix, "ZoomFly");
    }
}
