// ==========================================
// 鞋类库存调拨系统 - 领域类型定义
// ==========================================
// 依据: 调拨规则 - 两级补货体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 调拨级别 (Transfer Level)
// ==========================================
// Level 1: 品类补齐(门店完全缺某个产品族)
// Level 2: 单品补齐(门店缺某个确切变体)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferLevel {
    FamilyFill,  // 一级调拨
    VariantFill, // 二级调拨
}

impl TransferLevel {
    /// 输出表 Level 列的取值
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferLevel::FamilyFill => "1",
            TransferLevel::VariantFill => "2",
        }
    }

    /// 从输出表取值解析级别
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(TransferLevel::FamilyFill),
            "2" => Some(TransferLevel::VariantFill),
            _ => None,
        }
    }
}

impl fmt::Display for TransferLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        assert_eq!(TransferLevel::FamilyFill.as_str(), "1");
        assert_eq!(TransferLevel::VariantFill.as_str(), "2");
        assert_eq!(TransferLevel::from_str("1"), Some(TransferLevel::FamilyFill));
        assert_eq!(TransferLevel::from_str(" 2 "), Some(TransferLevel::VariantFill));
        assert_eq!(TransferLevel::from_str("3"), None);
    }
}
