// ==========================================
// 鞋类库存调拨系统 - 调拨汇总引擎
// ==========================================
// 依据: 输出表结构 - 合并计数 + 按调出库位分表
// ==========================================
// 职责: 单件事件 → 合并记录 → 每库位一张已排序的表
// 红线: 纯汇总,不回写账本,不改动事件
// ==========================================

use crate::domain::transfer::{TransferRecord, TransferSheet, UnitTransfer};
use crate::domain::types::TransferLevel;
use std::collections::HashMap;

// ==========================================
// GroupKey - 合并键
// ==========================================
// (From, To, Brand, Matrix, SKU, Size, Width, Color, Level)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    from_store: String,
    to_store: String,
    brand: String,
    matrix: String,
    manufacturer_sku: String,
    size: String,
    width: String,
    color: String,
    level: TransferLevel,
}

impl GroupKey {
    fn from_event(event: &UnitTransfer) -> Self {
        Self {
            from_store: event.from_store.clone(),
            to_store: event.to_store.clone(),
            brand: event.attributes.brand.clone(),
            matrix: event.attributes.matrix.clone(),
            manufacturer_sku: event.attributes.manufacturer_sku.clone(),
            size: event.attributes.size.clone(),
            width: event.attributes.width.clone(),
            color: event.attributes.color.clone(),
            level: event.level,
        }
    }

    fn into_record(self, quantity: u32) -> TransferRecord {
        TransferRecord {
            from_store: self.from_store,
            to_store: self.to_store,
            brand: self.brand,
            matrix: self.matrix,
            manufacturer_sku: self.manufacturer_sku,
            size: self.size,
            width: self.width,
            color: self.color,
            quantity,
            level: self.level,
        }
    }
}

// ==========================================
// TransferAggregator - 调拨汇总引擎
// ==========================================
pub struct TransferAggregator;

impl TransferAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 汇总事件序列并按库位分表
    ///
    /// # 参数
    /// - events: 单件调拨事件(发生顺序)
    /// - locations: 库位全集(门店按配置顺序,仓库最后)
    ///
    /// # 返回
    /// 每个库位一张表(无调出的库位保留空表),
    /// 表内按 (Brand, Matrix, SKU, Width, Color, Size) 升序;
    /// 排序键相同的记录保持事件首次出现顺序
    pub fn aggregate(&self, events: &[UnitTransfer], locations: &[String]) -> Vec<TransferSheet> {
        // 计数之外保留首次出现顺序,保证输出确定性
        let mut order: Vec<GroupKey> = Vec::new();
        let mut counts: HashMap<GroupKey, u32> = HashMap::new();
        for event in events {
            let key = GroupKey::from_event(event);
            let count = counts.entry(key.clone()).or_insert(0);
            if *count == 0 {
                order.push(key);
            }
            *count += 1;
        }

        let mut sheets = Vec::with_capacity(locations.len());
        for location in locations {
            let mut records: Vec<TransferRecord> = order
                .iter()
                .filter(|key| key.from_store == *location)
                .map(|key| key.clone().into_record(counts[key]))
                .collect();
            records.sort_by(|a, b| {
                (
                    &a.brand,
                    &a.matrix,
                    &a.manufacturer_sku,
                    &a.width,
                    &a.color,
                    &a.size,
                )
                    .cmp(&(
                        &b.brand,
                        &b.matrix,
                        &b.manufacturer_sku,
                        &b.width,
                        &b.color,
                        &b.size,
                    ))
            });
            sheets.push(TransferSheet {
                location: location.clone(),
                records,
            });
        }
        sheets
    }
}

impl Default for TransferAggregator {
    fn default() -> Self {
        Self::new()
    }
}
