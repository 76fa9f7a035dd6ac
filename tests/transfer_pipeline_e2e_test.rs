// ==========================================
// 调拨流程端到端测试
// ==========================================
// 测试目标: CSV 输入 → 导入 → 调拨 → 工作簿输出全链路
// 覆盖范围: 配置加载、列校验、零调拨终态、工作簿结构
// ==========================================

use calamine::{open_workbook, Reader, Xlsx};
use footwear_transfer::{
    logging, ImportError, InventoryImporter, StoreNetwork, TransferOrchestrator, TransferOutcome,
    TransferWorkbookWriter,
};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

// ==========================================
// 测试辅助函数
// ==========================================

const CSV_HEADER: &str =
    "Store,Matrix,Manufacturer SKU,Attribute 1,Attribute 2,Attribute 3,Brand,Quantity on Hand";

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "{}", CSV_HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn write_network_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("stores.json");
    std::fs::write(
        &path,
        r#"{
            "stores": [
                "Athletic Annex - Nora",
                "Athletic Annex - Carmel",
                "Athletic Annex - Fishers"
            ],
            "warehouse": "Athletic Annex - Expo/Team"
        }"#,
    )
    .unwrap();
    path
}

fn run_pipeline(csv: &Path, network: &StoreNetwork) -> TransferOutcome {
    let (records, _) = InventoryImporter::new().import(csv, network).unwrap();
    TransferOrchestrator::new(network.clone()).run(&records).unwrap()
}

// ==========================================
// 测试用例 1: 全链路生成工作簿
// ==========================================

#[test]
fn test_full_pipeline_writes_workbook() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let network = StoreNetwork::load_from_file(&write_network_config(&dir)).unwrap();
    // Nora 4 件独有,Carmel/Fishers 缺族 → 两笔一级调拨
    let csv = write_csv(&[
        "Athletic Annex - Nora,Gel-Kayano 31,1011B867,10,D,Black,Asics,4",
    ]);

    let outcome = run_pipeline(csv.path(), &network);
    let TransferOutcome::Plan(plan) = outcome else {
        panic!("expected a plan");
    };
    assert_eq!(plan.unit_count, 2);

    let output_path = dir.path().join("Footwear_Transfer_test.xlsx");
    TransferWorkbookWriter::new().write(&plan, &output_path).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&output_path).unwrap();
    // 每个库位一个工作表: 门店按配置顺序,仓库最后;"/" 被替换
    assert_eq!(
        workbook.sheet_names(),
        vec!["Nora", "Carmel", "Fishers", "Expo-Team"]
    );

    // Nora 是唯一调出方: 表头 + 2 行(两家接收门店各一行)
    let nora = workbook.worksheet_range("Nora").unwrap();
    assert_eq!(nora.rows().count(), 3);
    let first: Vec<String> = nora
        .rows()
        .nth(1)
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(first[0], "Athletic Annex - Nora");
    assert_eq!(first[1], "Athletic Annex - Carmel");
    assert_eq!(first[7], "Black");
    assert_eq!(first[8], "1"); // Quantity to Transfer
    assert_eq!(first[9], "1"); // Level

    // 无调出的库位保留空表(仅表头)
    let carmel = workbook.worksheet_range("Carmel").unwrap();
    assert_eq!(carmel.rows().count(), 1);
}

// ==========================================
// 测试用例 2: 零调拨终态
// ==========================================

#[test]
fn test_pipeline_reports_no_transfers() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let network = StoreNetwork::load_from_file(&write_network_config(&dir)).unwrap();
    // 每家门店各持一件,无人具备捐出资格
    let csv = write_csv(&[
        "Athletic Annex - Nora,Gel-Kayano 31,1011B867,10,D,Black,Asics,1",
        "Athletic Annex - Carmel,Gel-Kayano 31,1011B867,10,D,Black,Asics,1",
        "Athletic Annex - Fishers,Gel-Kayano 31,1011B867,10,D,Black,Asics,1",
    ]);

    let outcome = run_pipeline(csv.path(), &network);

    assert!(matches!(outcome, TransferOutcome::NoTransfers));
}

// ==========================================
// 测试用例 3: 列校验先于调拨失败
// ==========================================

#[test]
fn test_pipeline_fails_fast_on_schema_violation() {
    let dir = TempDir::new().unwrap();
    let network = StoreNetwork::load_from_file(&write_network_config(&dir)).unwrap();

    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "Store,Matrix,Brand").unwrap();
    writeln!(file, "Athletic Annex - Nora,Gel-Kayano 31,Asics").unwrap();

    let result = InventoryImporter::new().import(file.path(), &network);

    let Err(ImportError::MissingColumns { missing }) = result else {
        panic!("expected MissingColumns");
    };
    assert!(missing.contains(&"Quantity on Hand".to_string()));
    assert!(missing.contains(&"Attribute 3".to_string()));
}

// ==========================================
// 测试用例 4: 仓库补缺确切变体
// ==========================================

#[test]
fn test_pipeline_level_two_from_warehouse() {
    logging::init_test();

    let dir = TempDir::new().unwrap();
    let network = StoreNetwork::load_from_file(&write_network_config(&dir)).unwrap();
    // 三家门店都有族(White),Nora 缺 Black;
    // 门店持有的 Black 都不超过 1 件,只有仓库合格且会被掏空
    let csv = write_csv(&[
        "Athletic Annex - Nora,Clifton 9,1127Z91,9,D,White,Hoka,2",
        "Athletic Annex - Carmel,Clifton 9,1127Z91,9,D,White,Hoka,2",
        "Athletic Annex - Carmel,Clifton 9,1127Z91,9,D,Black,Hoka,1",
        "Athletic Annex - Fishers,Clifton 9,1127Z91,9,D,White,Hoka,2",
        "Athletic Annex - Expo/Team,Clifton 9,1127Z91,9,D,Black,Hoka,1",
    ]);

    let outcome = run_pipeline(csv.path(), &network);
    let TransferOutcome::Plan(plan) = outcome else {
        panic!("expected a plan");
    };

    // 仅一笔: 仓库→Nora 的 Black;Fishers 的 Black 缺口已无人合格,静默放弃
    assert_eq!(plan.unit_count, 1);
    let warehouse_sheet = plan
        .sheets
        .iter()
        .find(|s| s.location == "Athletic Annex - Expo/Team")
        .unwrap();
    assert_eq!(warehouse_sheet.records.len(), 1);
    let record = &warehouse_sheet.records[0];
    assert_eq!(record.to_store, "Athletic Annex - Nora");
    assert_eq!(record.color, "Black");
    assert_eq!(record.quantity, 1);
    assert_eq!(record.level.as_str(), "2");
}
