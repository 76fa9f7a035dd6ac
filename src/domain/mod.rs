// ==========================================
// 鞋类库存调拨系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、键值对象、类型
// 红线: 不含文件访问逻辑,不含引擎逻辑
// ==========================================

pub mod inventory;
pub mod keys;
pub mod transfer;
pub mod types;

// 重导出核心类型
pub use inventory::{
    CatalogItem, ImportSummary, InventoryRecord, ProductAttributes, RawInventoryRecord,
};
pub use keys::{FamilyKey, VariantKey};
pub use transfer::{TransferRecord, TransferSheet, UnitTransfer};
pub use types::TransferLevel;
