// ==========================================
// 鞋类库存调拨系统 - 库存导入器
// ==========================================
// 职责: 文件解析 → 列校验 → 字段映射 → 同键合并
// ==========================================
// 输出: 合并后的库存记录(建账输入) + 批次摘要
// ==========================================

use crate::config::StoreNetwork;
use crate::domain::inventory::{ImportSummary, InventoryRecord, RawInventoryRecord};
use crate::domain::keys::VariantKey;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

// ==========================================
// InventoryImporter - 库存导入器
// ==========================================
pub struct InventoryImporter {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl InventoryImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 导入库存文件
    ///
    /// # 参数
    /// - path: 输入文件(.csv/.xlsx/.xls)
    /// - network: 门店网络配置(用于统计范围外库位)
    ///
    /// # 返回
    /// (合并后的库存记录, 批次摘要)
    ///
    /// 同一(库位, 变体)的多行在此求和为一条;
    /// 范围外库位的行保留入账,但不参与后续调拨候选
    pub fn import(
        &self,
        path: &Path,
        network: &StoreNetwork,
    ) -> ImportResult<(Vec<InventoryRecord>, ImportSummary)> {
        let table = self.parser.parse(path)?;
        self.mapper.validate_headers(&table.headers)?;

        let mut raw_records: Vec<RawInventoryRecord> = Vec::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            // 数据行从第 2 行起(第 1 行为表头)
            raw_records.push(self.mapper.map_row(row, idx + 2)?);
        }

        let (records, unknown_location_rows) = self.merge(&raw_records, network);

        let summary = ImportSummary {
            batch_id: Uuid::new_v4().to_string(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            total_rows: raw_records.len(),
            merged_records: records.len(),
            unknown_location_rows,
        };

        info!(
            batch_id = %summary.batch_id,
            total_rows = summary.total_rows,
            merged_records = summary.merged_records,
            unknown_location_rows = summary.unknown_location_rows,
            "库存导入完成"
        );
        Ok((records, summary))
    }

    /// 按(库位, 变体)求和合并;返回(记录, 范围外行数)
    fn merge(
        &self,
        raw_records: &[RawInventoryRecord],
        network: &StoreNetwork,
    ) -> (Vec<InventoryRecord>, usize) {
        let mut merged: BTreeMap<(String, VariantKey), InventoryRecord> = BTreeMap::new();
        let mut unknown_locations: BTreeSet<String> = BTreeSet::new();
        let mut unknown_location_rows = 0usize;

        for raw in raw_records {
            if !network.contains(&raw.store) {
                unknown_location_rows += 1;
                unknown_locations.insert(raw.store.clone());
            }

            let key = (raw.store.clone(), raw.variant_key());
            merged
                .entry(key)
                .and_modify(|record| record.quantity_on_hand += raw.quantity_on_hand)
                .or_insert_with(|| InventoryRecord {
                    store: raw.store.clone(),
                    variant: raw.variant_key(),
                    attributes: raw.attributes(),
                    quantity_on_hand: raw.quantity_on_hand,
                });
        }

        for location in &unknown_locations {
            warn!(%location, "库位不在配置范围内,入账但不参与调拨");
        }

        (merged.into_values().collect(), unknown_location_rows)
    }
}

impl Default for InventoryImporter {
    fn default() -> Self {
        Self::new()
    }
}
