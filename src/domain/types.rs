// ==========================================
// 成本差异分析系统 - 领域类型定义
// ==========================================
// 符号约定: 总差异 ≥ 0 为有利(Favorable)，否则不利(Unfavorable)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 差异状态 (Variance Status)
// ==========================================
// 判定口径: 按总差异金额，不按差异百分比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceStatus {
    Favorable,   // 有利差异（实际不超标准）
    Unfavorable, // 不利差异（实际超出标准）
}

impl VarianceStatus {
    /// 按总差异金额判定状态
    ///
    /// # 规则
    /// - total_variance ≥ 0 → Favorable
    /// - total_variance < 0 → Unfavorable
    pub fn from_total_variance(total_variance: f64) -> Self {
        if total_variance >= 0.0 {
            VarianceStatus::Favorable
        } else {
            VarianceStatus::Unfavorable
        }
    }

    /// 报表单元格文本
    pub fn as_str(&self) -> &'static str {
        match self {
            VarianceStatus::Favorable => "Favorable",
            VarianceStatus::Unfavorable => "Unfavorable",
        }
    }

    /// 汇总区大写标签（[FAVORABLE] / [UNFAVORABLE]）
    pub fn summary_tag(&self) -> &'static str {
        match self {
            VarianceStatus::Favorable => "FAVORABLE",
            VarianceStatus::Unfavorable => "UNFAVORABLE",
        }
    }
}

impl fmt::Display for VarianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_total_variance_boundary() {
        // 边界: 0 属于有利
        assert_eq!(
            VarianceStatus::from_total_variance(0.0),
            VarianceStatus::Favorable
        );
        assert_eq!(
            VarianceStatus::from_total_variance(0.01),
            VarianceStatus::Favorable
        );
        assert_eq!(
            VarianceStatus::from_total_variance(-0.01),
            VarianceStatus::Unfavorable
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(VarianceStatus::Favorable.to_string(), "Favorable");
        assert_eq!(VarianceStatus::Unfavorable.summary_tag(), "UNFAVORABLE");
    }
}
