// ==========================================
// 鞋类库存调拨系统 - 数量账本
// ==========================================
// 依据: 调拨规则 - 以(库位, 变体)为键的可变数量表
// ==========================================
// 职责: 点查、点增减、按产品族聚合
// 红线: 账本自身不设下限;扣减前的资格确认由调用方负责
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::domain::keys::{FamilyKey, VariantKey};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ==========================================
// LedgerError - 账本错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum LedgerError {
    // 扣减了建账时不存在的条目,属于程序逻辑故障
    #[error("账本条目不存在: location={location}, variant={variant}")]
    MissingEntry { location: String, variant: String },
}

// ==========================================
// QuantityLedger - 数量账本
// ==========================================
// 每次运行构建一份,由调用方独占持有,运行结束即弃;
// 单线程顺序变更,无跨运行持久化
#[derive(Debug, Default)]
pub struct QuantityLedger {
    // (库位 → 变体 → 数量)
    quantities: HashMap<String, HashMap<VariantKey, i64>>,
    // 族索引: (库位 → 产品族 → 该族下出现过的变体,键序)
    // 建账时构建一次,使族聚合只扫描命中条目
    family_index: HashMap<String, HashMap<FamilyKey, BTreeSet<VariantKey>>>,
}

impl QuantityLedger {
    /// 从合并后的库存记录建账
    ///
    /// 建账后各条目数量等于输入行按(库位, 变体)分组求和的结果
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let mut ledger = Self::default();
        for record in records {
            let entry = ledger
                .quantities
                .entry(record.store.clone())
                .or_default()
                .entry(record.variant.clone())
                .or_insert(0);
            *entry += record.quantity_on_hand;

            ledger
                .family_index
                .entry(record.store.clone())
                .or_default()
                .entry(record.variant.family.clone())
                .or_default()
                .insert(record.variant.clone());
        }
        ledger
    }

    /// 点查数量;条目不存在返回 0
    pub fn get(&self, location: &str, variant: &VariantKey) -> i64 {
        self.quantities
            .get(location)
            .and_then(|m| m.get(variant))
            .copied()
            .unwrap_or(0)
    }

    /// 扣减一件并返回扣减后的数量
    ///
    /// 条目必须已存在(建账或此前的入账创建);
    /// 不存在即报错,不做静默补零
    pub fn decrement(&mut self, location: &str, variant: &VariantKey) -> Result<i64, LedgerError> {
        match self
            .quantities
            .get_mut(location)
            .and_then(|m| m.get_mut(variant))
        {
            Some(quantity) => {
                *quantity -= 1;
                Ok(*quantity)
            }
            None => Err(LedgerError::MissingEntry {
                location: location.to_string(),
                variant: variant.to_string(),
            }),
        }
    }

    /// 入账一件;条目不存在时以 1 创建,并同步族索引
    pub fn increment(&mut self, location: &str, variant: &VariantKey) {
        let entry = self
            .quantities
            .entry(location.to_string())
            .or_default()
            .entry(variant.clone())
            .or_insert(0);
        *entry += 1;

        self.family_index
            .entry(location.to_string())
            .or_default()
            .entry(variant.family.clone())
            .or_default()
            .insert(variant.clone());
    }

    /// 某库位上指定产品族的正数量合计
    pub fn family_total(&self, location: &str, family: &FamilyKey) -> i64 {
        self.variants_in_family(location, family)
            .iter()
            .map(|(_, quantity)| quantity)
            .sum()
    }

    /// 某库位上指定产品族下数量 > 0 的变体,按变体键升序
    pub fn variants_in_family(
        &self,
        location: &str,
        family: &FamilyKey,
    ) -> Vec<(&VariantKey, i64)> {
        let Some(variants) = self
            .family_index
            .get(location)
            .and_then(|m| m.get(family))
        else {
            return Vec::new();
        };
        variants
            .iter()
            .map(|variant| (variant, self.get(location, variant)))
            .filter(|(_, quantity)| *quantity > 0)
            .collect()
    }

    /// 指定变体跨所有库位的数量合计(守恒性检查用)
    pub fn variant_total(&self, variant: &VariantKey) -> i64 {
        self.quantities
            .values()
            .filter_map(|m| m.get(variant))
            .sum()
    }

    /// 全账本件数合计
    pub fn total_units(&self) -> i64 {
        self.quantities
            .values()
            .flat_map(|m| m.values())
            .sum()
    }
}
