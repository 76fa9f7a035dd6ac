// ==========================================
// 鞋类库存调拨系统 - 配置层
// ==========================================
// 职责: 外部提供的库位全集(门店顺序 + 仓库)
// ==========================================

pub mod network;

pub use network::{ConfigError, StoreNetwork};
