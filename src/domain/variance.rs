// ==========================================
// 成本差异分析系统 - 差异结果领域模型
// ==========================================
// 职责: 承载引擎层派生结果（本身不含计算逻辑）
// 不变量: 所有派生字段是输入字段的纯函数
// ==========================================

use crate::domain::types::VarianceStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// VarianceRecord - 单产品差异分析结果
// ==========================================
// 列顺序对齐报表/导出: Product, Total_Std_Cost, Total_Act_Cost,
// PPV, Usage_Var, Labor_Rate_Var, Labor_Eff_Var, Overhead_Var,
// Total_Variance, Variance_%, Status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub product: String, // 产品名称

    // ===== 成本汇总 =====
    pub total_std_cost: f64, // 标准总成本 = 材料 + 人工 + 制造费用
    pub total_act_cost: f64, // 实际总成本 = 材料 + 人工 + 制造费用

    // ===== 五项差异 =====
    pub ppv: f64,            // 材料采购价格差异
    pub usage_var: f64,      // 材料用量差异
    pub labor_rate_var: f64, // 人工费率差异
    pub labor_eff_var: f64,  // 人工效率差异
    pub overhead_var: f64,   // 制造费用差异

    // ===== 合计与状态 =====
    pub total_variance: f64, // 五项差异之和
    pub variance_pct: f64,   // 差异百分比（已四舍五入到 2 位小数）
    pub status: VarianceStatus,
}

// ==========================================
// AnalysisSummary - 全表汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_std_cost: f64,    // 标准总成本合计
    pub total_act_cost: f64,    // 实际总成本合计
    pub net_variance: f64,      // 净差异（各产品 total_variance 之和）
    pub status: VarianceStatus, // 净差异状态
}

// ==========================================
// AlertItem - 管理层关注清单条目
// ==========================================
// 触发口径: |variance_pct| > 阈值（按已四舍五入的百分比判断）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertItem {
    pub product: String,
    pub variance_pct: f64,
    pub status: VarianceStatus,
}
