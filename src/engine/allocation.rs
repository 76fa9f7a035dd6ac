// ==========================================
// 鞋类库存调拨系统 - 调拨填补引擎
// ==========================================
// 依据: 调拨规则 - 两级贪心填补
// 红线: 一级(产品族)全部完成后才进入二级(确切变体)
// ==========================================
// 职责: 遍历商品目录 × 门店,发现缺口即就地填补
// 输入: 商品目录(按变体键排序) + 数量账本
// 输出: 单件调拨事件序列(生成即落账,不回滚)
// ==========================================

use crate::config::StoreNetwork;
use crate::domain::inventory::CatalogItem;
use crate::domain::keys::VariantKey;
use crate::domain::transfer::UnitTransfer;
use crate::domain::types::TransferLevel;
use crate::engine::donor_selector::DonorSelector;
use crate::engine::ledger::{LedgerError, QuantityLedger};
use thiserror::Error;
use tracing::{debug, info, instrument};

// ==========================================
// AllocationError - 调拨引擎错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum AllocationError {
    // 捐出方资格确认与随后的落账不一致,属于程序逻辑故障,
    // 必须中止而不是夹平
    #[error("账本不变量被破坏: location={location}, variant={variant}, 扣减后数量={remaining}")]
    InvariantViolation {
        location: String,
        variant: String,
        remaining: i64,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

// ==========================================
// AllocationEngine - 调拨填补引擎
// ==========================================
// 贪心、先到先得:事件一经生成并落账即不撤销,
// 即使后续步骤存在全局更优的选择
pub struct AllocationEngine {
    selector: DonorSelector,
    stores: Vec<String>, // 非仓库门店,配置顺序
}

impl AllocationEngine {
    pub fn new(network: &StoreNetwork) -> Self {
        Self {
            selector: DonorSelector::new(network),
            stores: network.stores().to_vec(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行两级填补,返回按发生顺序排列的单件调拨事件
    ///
    /// # 参数
    /// - catalog: 商品目录(去重变体,按变体键排序)
    /// - ledger: 数量账本(会被修改)
    #[instrument(skip(self, catalog, ledger), fields(catalog_len = catalog.len(), store_count = self.stores.len()))]
    pub fn allocate(
        &self,
        catalog: &[CatalogItem],
        ledger: &mut QuantityLedger,
    ) -> Result<Vec<UnitTransfer>, AllocationError> {
        let mut transfers = Vec::new();

        self.fill_family_gaps(catalog, ledger, &mut transfers)?;
        let family_fills = transfers.len();
        debug!(family_fills, "一级填补完成");

        self.fill_variant_gaps(catalog, ledger, &mut transfers)?;
        let variant_fills = transfers.len() - family_fills;
        debug!(variant_fills, "二级填补完成");

        info!(
            family_fills,
            variant_fills,
            total = transfers.len(),
            "调拨填补完成"
        );
        Ok(transfers)
    }

    // ==========================================
    // 一级: 产品族填补
    // ==========================================
    // 门店的族合计为 0 时,从最佳捐出方取其族内存量最大的变体补一件。
    // Color 记录捐出变体的颜色,其余输出属性取触发条目;
    // 无合格捐出方则静默跳过,不产生缺货记录
    fn fill_family_gaps(
        &self,
        catalog: &[CatalogItem],
        ledger: &mut QuantityLedger,
        transfers: &mut Vec<UnitTransfer>,
    ) -> Result<(), AllocationError> {
        for item in catalog {
            let family = item.family();
            for store in &self.stores {
                if ledger.family_total(store, family) > 0 {
                    continue;
                }
                let Some(donor) = self.selector.best_family_donor(ledger, store, family) else {
                    continue;
                };
                let Some(chosen) = self.selector.pick_variant_for_family(ledger, donor, family)
                else {
                    continue;
                };

                let mut attributes = item.attributes.clone();
                attributes.color = chosen.color.clone();
                transfers.push(UnitTransfer {
                    from_store: donor.to_string(),
                    to_store: store.clone(),
                    variant: chosen.clone(),
                    level: TransferLevel::FamilyFill,
                    attributes,
                });

                let donor = donor.to_string();
                self.apply(ledger, &donor, store, &chosen)?;
            }
        }
        Ok(())
    }

    // ==========================================
    // 二级: 确切变体填补
    // ==========================================
    // 一级落账对本级可见:一级补进的变体若恰好命中,
    // 该门店该变体不再视为缺口
    fn fill_variant_gaps(
        &self,
        catalog: &[CatalogItem],
        ledger: &mut QuantityLedger,
        transfers: &mut Vec<UnitTransfer>,
    ) -> Result<(), AllocationError> {
        for item in catalog {
            for store in &self.stores {
                if ledger.get(store, &item.variant) != 0 {
                    continue;
                }
                let Some(donor) = self.selector.best_variant_donor(ledger, store, &item.variant)
                else {
                    continue;
                };

                transfers.push(UnitTransfer {
                    from_store: donor.to_string(),
                    to_store: store.clone(),
                    variant: item.variant.clone(),
                    level: TransferLevel::VariantFill,
                    attributes: item.attributes.clone(),
                });

                let donor = donor.to_string();
                self.apply(ledger, &donor, store, &item.variant)?;
            }
        }
        Ok(())
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 原子落账: 捐出方扣减一件,接收方入账一件
    ///
    /// 扣减结果为负说明资格确认与账本状态脱节,立即中止
    fn apply(
        &self,
        ledger: &mut QuantityLedger,
        from: &str,
        to: &str,
        variant: &VariantKey,
    ) -> Result<(), AllocationError> {
        let remaining = ledger.decrement(from, variant)?;
        if remaining < 0 {
            return Err(AllocationError::InvariantViolation {
                location: from.to_string(),
                variant: variant.to_string(),
                remaining,
            });
        }
        ledger.increment(to, variant);
        Ok(())
    }
}
