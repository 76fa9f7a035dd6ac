// ==========================================
// 鞋类库存调拨系统 - 调拨领域模型
// ==========================================
// 依据: 输出表结构 - 调拨单(按调出库位分表)
// ==========================================

use crate::domain::inventory::ProductAttributes;
use crate::domain::keys::VariantKey;
use crate::domain::types::TransferLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// UnitTransfer - 单件调拨事件
// ==========================================
// 每移动一件生成一条;生成后立即落账,此后不再变更,
// 生命周期止于汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitTransfer {
    pub from_store: String,
    pub to_store: String,
    pub variant: VariantKey, // 实际移动的变体
    pub level: TransferLevel,
    // 输出列属性;一级调拨的 Color 取捐出变体,其余取触发条目
    pub attributes: ProductAttributes,
}

// ==========================================
// TransferRecord - 合并调拨记录
// ==========================================
// 相同(From, To, 属性, Level)的事件合并为一行,
// Quantity to Transfer = 参与合并的事件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from_store: String,
    pub to_store: String,
    pub brand: String,
    pub matrix: String,
    pub manufacturer_sku: String,
    pub size: String,
    pub width: String,
    pub color: String,
    pub quantity: u32, // Quantity to Transfer
    pub level: TransferLevel,
}

// ==========================================
// TransferSheet - 按调出库位分表
// ==========================================
// 固定库位全集中每个库位一张表,无调出也保留空表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSheet {
    pub location: String,
    pub records: Vec<TransferRecord>,
}

impl TransferSheet {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 该库位调出的总件数
    pub fn unit_count(&self) -> u32 {
        self.records.iter().map(|r| r.quantity).sum()
    }
}
