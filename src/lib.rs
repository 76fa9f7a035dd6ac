// ==========================================
// 鞋类库存调拨系统 - 核心库
// ==========================================
// 系统定位: 门店补货决策支持(调拨单由人工执行)
// 调拨目标: 每家门店对其应备产品族至少持有一件,
//           缺口从姊妹门店或中央仓库的富余中补齐
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 键值对象与实体
pub mod domain;

// 引擎层 - 调拨规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 调拨单工作簿
pub mod export;

// 配置层 - 门店网络
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CatalogItem, FamilyKey, ImportSummary, InventoryRecord, ProductAttributes,
    RawInventoryRecord, TransferLevel, TransferRecord, TransferSheet, UnitTransfer, VariantKey,
};

// 引擎
pub use engine::{
    AllocationEngine, AllocationError, DonorSelector, QuantityLedger, TransferAggregator,
    TransferOrchestrator, TransferOutcome, TransferPlan,
};

// 配置
pub use config::{ConfigError, StoreNetwork};

// 导入与导出
pub use export::{ExportError, TransferWorkbookWriter};
pub use importer::{ImportError, InventoryImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "鞋类库存调拨系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
