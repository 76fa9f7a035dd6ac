// ==========================================
// 鞋类库存调拨系统 - 引擎编排器
// ==========================================
// 用途: 协调建账 → 两级填补 → 汇总分表的执行顺序
// ==========================================

use crate::config::StoreNetwork;
use crate::domain::inventory::{CatalogItem, InventoryRecord};
use crate::domain::transfer::TransferSheet;
use crate::engine::aggregator::TransferAggregator;
use crate::engine::allocation::{AllocationEngine, AllocationError};
use crate::engine::ledger::QuantityLedger;
use tracing::{debug, info};

// ==========================================
// TransferOutcome - 调拨结果
// ==========================================
#[derive(Debug, Clone)]
pub enum TransferOutcome {
    /// 零调拨: 没有任何缺口能够被填补。
    /// 正常终态而非错误,调用方据此提示而不产出文件
    NoTransfers,
    /// 至少一笔调拨,携带完整的分表方案
    Plan(TransferPlan),
}

// ==========================================
// TransferPlan - 调拨方案
// ==========================================
#[derive(Debug, Clone)]
pub struct TransferPlan {
    // 每个库位一张表(门店按配置顺序,仓库最后;空表保留)
    pub sheets: Vec<TransferSheet>,
    pub unit_count: usize,   // 移动的总件数
    pub record_count: usize, // 合并后的总行数
}

// ==========================================
// TransferOrchestrator - 引擎编排器
// ==========================================
pub struct TransferOrchestrator {
    network: StoreNetwork,
    engine: AllocationEngine,
    aggregator: TransferAggregator,
}

impl TransferOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - network: 门店网络配置
    pub fn new(network: StoreNetwork) -> Self {
        Self {
            engine: AllocationEngine::new(&network),
            aggregator: TransferAggregator::new(),
            network,
        }
    }

    /// 执行完整调拨流程
    ///
    /// # 参数
    /// - records: 合并后的库存记录
    ///
    /// # 返回
    /// 调拨结果(零调拨或完整方案)
    pub fn run(&self, records: &[InventoryRecord]) -> Result<TransferOutcome, AllocationError> {
        info!(record_count = records.len(), "开始执行调拨流程");

        // ==========================================
        // 步骤1: 建账
        // ==========================================
        let mut ledger = QuantityLedger::from_records(records);
        debug!(total_units = ledger.total_units(), "数量账本构建完成");

        // ==========================================
        // 步骤2: 商品目录(去重变体,按变体键排序)
        // ==========================================
        let catalog = CatalogItem::catalog_from_records(records);
        debug!(catalog_len = catalog.len(), "商品目录构建完成");

        // ==========================================
        // 步骤3: 两级贪心填补
        // ==========================================
        let events = self.engine.allocate(&catalog, &mut ledger)?;
        if events.is_empty() {
            info!("未生成任何调拨");
            return Ok(TransferOutcome::NoTransfers);
        }

        // ==========================================
        // 步骤4: 汇总分表
        // ==========================================
        let locations: Vec<String> = self.network.all_locations().map(str::to_string).collect();
        let sheets = self.aggregator.aggregate(&events, &locations);
        let record_count = sheets.iter().map(|s| s.records.len()).sum();

        info!(
            unit_count = events.len(),
            record_count, "调拨流程完成"
        );
        Ok(TransferOutcome::Plan(TransferPlan {
            sheets,
            unit_count: events.len(),
            record_count,
        }))
    }
}
