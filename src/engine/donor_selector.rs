// ==========================================
// 鞋类库存调拨系统 - 捐出方选择引擎
// ==========================================
// 依据: 调拨规则 - 两级资格与平局裁决
// ==========================================
// 职责: 给定账本快照,返回最佳合格捐出方或无
// 红线: 纯查询,不变更账本;结果对相同账本状态确定
// ==========================================

use crate::config::StoreNetwork;
use crate::domain::keys::{FamilyKey, VariantKey};
use crate::engine::ledger::QuantityLedger;

// ==========================================
// DonorSelector - 捐出方选择引擎
// ==========================================
// 候选顺序 = 配置顺序(门店按列出顺序,仓库最后);
// 平局时首个遇到的最大值胜出
pub struct DonorSelector {
    locations: Vec<String>,
    warehouse: String,
}

impl DonorSelector {
    pub fn new(network: &StoreNetwork) -> Self {
        Self {
            locations: network.all_locations().map(str::to_string).collect(),
            warehouse: network.warehouse().to_string(),
        }
    }

    // ==========================================
    // 一级(产品族)选择
    // ==========================================

    /// 为请求方挑选产品族级最佳捐出方
    ///
    /// 资格: 族合计 > 1(捐出后至少保留一件);
    /// 择优: 族合计严格最大,平局按候选顺序先到先得
    pub fn best_family_donor<'a>(
        &'a self,
        ledger: &QuantityLedger,
        requester: &str,
        family: &FamilyKey,
    ) -> Option<&'a str> {
        let mut best: Option<(&str, i64)> = None;
        for donor in self.locations.iter().map(String::as_str) {
            if donor == requester {
                continue;
            }
            let total = ledger.family_total(donor, family);
            if total > 1 && best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((donor, total));
            }
        }
        best.map(|(donor, _)| donor)
    }

    /// 在捐出方的指定产品族内挑选捐出变体
    ///
    /// 数量 > 0 的变体中取数量最大者;平局取变体键最小者
    pub fn pick_variant_for_family(
        &self,
        ledger: &QuantityLedger,
        donor: &str,
        family: &FamilyKey,
    ) -> Option<VariantKey> {
        let mut best: Option<(&VariantKey, i64)> = None;
        for (variant, quantity) in ledger.variants_in_family(donor, family) {
            if best.map_or(true, |(_, best_quantity)| quantity > best_quantity) {
                best = Some((variant, quantity));
            }
        }
        best.map(|(variant, _)| variant.clone())
    }

    // ==========================================
    // 二级(确切变体)选择
    // ==========================================

    /// 为请求方挑选变体级最佳捐出方
    ///
    /// 资格: 仓库数量 > 0 即可被掏空;
    /// 门店数量 > 1(捐出后保留一件,本级不清空门店);
    /// 择优: 数量严格最大,平局按候选顺序先到先得
    pub fn best_variant_donor<'a>(
        &'a self,
        ledger: &QuantityLedger,
        requester: &str,
        variant: &VariantKey,
    ) -> Option<&'a str> {
        let mut best: Option<(&str, i64)> = None;
        for donor in self.locations.iter().map(String::as_str) {
            if donor == requester {
                continue;
            }
            let quantity = ledger.get(donor, variant);
            let floor = if donor == self.warehouse { 0 } else { 1 };
            if quantity > floor && best.map_or(true, |(_, best_quantity)| quantity > best_quantity)
            {
                best = Some((donor, quantity));
            }
        }
        best.map(|(donor, _)| donor)
    }
}
