// ==========================================
// 鞋类库存调拨系统 - 商品键值对象
// ==========================================
// 依据: 商品矩阵 - 产品族与变体两级标识
// ==========================================
// 红线: 族归属用结构相等判断,不用字符串前缀
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// FamilyKey - 产品族键
// ==========================================
// 组成: (Matrix, Attribute 2, Attribute 1)
// 含义: "该商品的任意变体"(同款同宽同码,颜色不限)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FamilyKey {
    pub matrix: String, // 商品矩阵(产品线)
    pub width: String,  // Attribute 2(宽度)
    pub size: String,   // Attribute 1(尺码)
}

impl FamilyKey {
    pub fn new(
        matrix: impl Into<String>,
        width: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            matrix: matrix.into(),
            width: width.into(),
            size: size.into(),
        }
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.matrix, self.width, self.size)
    }
}

// ==========================================
// VariantKey - 变体键
// ==========================================
// 组成: FamilyKey + Attribute 3(颜色)
// 变体持有其产品族键;族归属 = 持有键的结构相等,
// 避免 "10" / "10.5" 这类展示串前缀重叠造成的误归属
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub family: FamilyKey,
    pub color: String, // Attribute 3(颜色)
}

impl VariantKey {
    pub fn new(family: FamilyKey, color: impl Into<String>) -> Self {
        Self {
            family,
            color: color.into(),
        }
    }

    /// 所属产品族
    pub fn family(&self) -> &FamilyKey {
        &self.family
    }

    /// 是否属于指定产品族
    pub fn is_in_family(&self, family: &FamilyKey) -> bool {
        &self.family == family
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.family, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_separator() {
        let family = FamilyKey::new("Gel-Kayano 31", "D", "10");
        assert_eq!(family.to_string(), "Gel-Kayano 31 - D - 10");

        let variant = VariantKey::new(family, "Black");
        assert_eq!(variant.to_string(), "Gel-Kayano 31 - D - 10 - Black");
    }

    #[test]
    fn test_family_membership_is_structural() {
        let family = FamilyKey::new("Gel-Kayano 31", "D", "10");
        let variant = VariantKey::new(family.clone(), "Black");

        assert!(variant.is_in_family(&family));
        assert!(!variant.is_in_family(&FamilyKey::new("Gel-Kayano 31", "D", "10.5")));
    }

    #[test]
    fn test_prefix_overlap_does_not_leak_across_families() {
        // 展示串 "M - D - 10" 是 "M - D - 10.5 - Blue" 的前缀,
        // 结构比较下二者不相干
        let family_10 = FamilyKey::new("M", "D", "10");
        let variant_105 = VariantKey::new(FamilyKey::new("M", "D", "10.5"), "Blue");

        assert!(variant_105.to_string().starts_with(&family_10.to_string()));
        assert!(!variant_105.is_in_family(&family_10));
    }

    #[test]
    fn test_ordering_is_field_wise() {
        let a = VariantKey::new(FamilyKey::new("A", "D", "10"), "Black");
        let b = VariantKey::new(FamilyKey::new("A", "D", "10"), "White");
        let c = VariantKey::new(FamilyKey::new("B", "2E", "9"), "Black");

        assert!(a < b);
        assert!(b < c);
    }
}
