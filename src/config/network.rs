// ==========================================
// 鞋类库存调拨系统 - 门店网络配置
// ==========================================
// 依据: 库位全集必须外部提供,不得硬编码
// ==========================================
// 职责: 配置加载、校验、库位全集枚举
// 存储: JSON 文件 { "stores": [...], "warehouse": "..." }
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// ConfigError - 配置错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("门店列表为空")]
    EmptyStores,

    #[error("库位重复: {0}")]
    DuplicateLocation(String),

    #[error("仓库不能同时出现在门店列表中: {0}")]
    WarehouseListedAsStore(String),
}

// ==========================================
// StoreNetwork - 门店网络
// ==========================================
// 门店按列出顺序参与候选枚举,仓库固定排在最后;
// 该顺序同时决定捐出方平局裁决与输出分表顺序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreNetwork {
    stores: Vec<String>,
    warehouse: String,
}

impl StoreNetwork {
    /// 构造并校验门店网络
    pub fn new(stores: Vec<String>, warehouse: impl Into<String>) -> Result<Self, ConfigError> {
        let network = Self {
            stores,
            warehouse: warehouse.into(),
        };
        network.validate()?;
        Ok(network)
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let network: StoreNetwork = serde_json::from_str(&raw)?;
        network.validate()?;
        Ok(network)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stores.is_empty() {
            return Err(ConfigError::EmptyStores);
        }
        let mut seen = std::collections::HashSet::new();
        for store in &self.stores {
            if !seen.insert(store.as_str()) {
                return Err(ConfigError::DuplicateLocation(store.clone()));
            }
        }
        if seen.contains(self.warehouse.as_str()) {
            return Err(ConfigError::WarehouseListedAsStore(self.warehouse.clone()));
        }
        Ok(())
    }

    /// 门店列表(配置顺序,不含仓库)
    pub fn stores(&self) -> &[String] {
        &self.stores
    }

    /// 仓库标识
    pub fn warehouse(&self) -> &str {
        &self.warehouse
    }

    /// 库位全集: 门店按配置顺序,仓库最后
    pub fn all_locations(&self) -> impl Iterator<Item = &str> {
        self.stores
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.warehouse.as_str()))
    }

    pub fn is_warehouse(&self, location: &str) -> bool {
        self.warehouse == location
    }

    /// 库位是否属于配置范围(门店或仓库)
    pub fn contains(&self, location: &str) -> bool {
        self.is_warehouse(location) || self.stores.iter().any(|s| s == location)
    }
}
