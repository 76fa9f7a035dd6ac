// ==========================================
// 鞋类库存调拨系统 - 命令行入口
// ==========================================
// 用法:
//   footwear-transfer <inventory.(csv|xlsx)> [stores.json] [output_dir]
//
// 零调拨时仅提示,不产出文件
// ==========================================

use anyhow::Context;
use chrono::Local;
use footwear_transfer::{
    logging, InventoryImporter, StoreNetwork, TransferOrchestrator, TransferOutcome,
    TransferWorkbookWriter,
};
use std::path::{Path, PathBuf};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().context(
        "用法: footwear-transfer <inventory.(csv|xlsx)> [stores.json] [output_dir]",
    )?;
    let config_path = args.next().unwrap_or_else(|| "stores.json".to_string());
    let output_dir = args.next().map(PathBuf::from);

    let input_path = Path::new(&input);
    let network = StoreNetwork::load_from_file(Path::new(&config_path))
        .with_context(|| format!("加载门店网络配置失败: {}", config_path))?;
    info!(
        store_count = network.stores().len(),
        warehouse = network.warehouse(),
        "门店网络配置加载完成"
    );

    let (records, summary) = InventoryImporter::new()
        .import(input_path, &network)
        .with_context(|| format!("导入库存文件失败: {}", input))?;
    println!(
        "已导入 {} 行,合并为 {} 条库存记录 (批次 {})",
        summary.total_rows, summary.merged_records, summary.batch_id
    );

    let orchestrator = TransferOrchestrator::new(network);
    match orchestrator.run(&records)? {
        TransferOutcome::NoTransfers => {
            println!("未生成任何调拨。");
        }
        TransferOutcome::Plan(plan) => {
            let today = Local::now().date_naive();
            let output_path = match output_dir {
                Some(dir) => dir.join(TransferWorkbookWriter::output_file_name(today)),
                None => TransferWorkbookWriter::default_output_path(input_path, today),
            };
            TransferWorkbookWriter::new().write(&plan, &output_path)?;
            println!(
                "调拨单已生成: {} ({} 行, {} 件)",
                output_path.display(),
                plan.record_count,
                plan.unit_count
            );
        }
    }

    Ok(())
}
