// ==========================================
// 成本差异分析系统 - Variance Core 纯函数库
// ==========================================
// 职责: 提供五项差异、成本汇总、百分比的纯计算
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

// ==========================================
// VarianceCore - 纯函数工具类
// ==========================================
pub struct VarianceCore;

impl VarianceCore {
    /// 材料采购价格差异 (PPV)
    ///
    /// # 规则
    /// - ppv = (标准单价 - 实际单价) × 实际用量
    pub fn purchase_price_variance(
        std_material_price: f64,
        act_material_price: f64,
        act_material_qty: f64,
    ) -> f64 {
        (std_material_price - act_material_price) * act_material_qty
    }

    /// 材料用量差异
    ///
    /// # 规则
    /// - usage_var = (标准用量 - 实际用量) × 标准单价
    pub fn usage_variance(
        std_material_qty: f64,
        act_material_qty: f64,
        std_material_price: f64,
    ) -> f64 {
        (std_material_qty - act_material_qty) * std_material_price
    }

    /// 人工费率差异
    ///
    /// # 规则
    /// - labor_rate_var = (标准费率 - 实际费率) × 实际工时
    pub fn labor_rate_variance(
        std_labor_rate: f64,
        act_labor_rate: f64,
        act_labor_hours: f64,
    ) -> f64 {
        (std_labor_rate - act_labor_rate) * act_labor_hours
    }

    /// 人工效率差异
    ///
    /// # 规则
    /// - labor_eff_var = (标准工时 - 实际工时) × 标准费率
    pub fn labor_efficiency_variance(
        std_labor_hours: f64,
        act_labor_hours: f64,
        std_labor_rate: f64,
    ) -> f64 {
        (std_labor_hours - act_labor_hours) * std_labor_rate
    }

    /// 制造费用差异
    ///
    /// # 规则
    /// - overhead_var = 标准制造费用 - 实际制造费用
    pub fn overhead_variance(std_overhead: f64, act_overhead: f64) -> f64 {
        std_overhead - act_overhead
    }

    /// 差异百分比（2 位小数）
    ///
    /// # 规则
    /// - variance_pct = (实际总成本 - 标准总成本) / 标准总成本 × 100
    /// - 四舍五入到 2 位小数
    /// - 标准总成本为 0 时定义为 0.0（避免除零，口径见 DESIGN.md）
    pub fn variance_percentage(total_std_cost: f64, total_act_cost: f64) -> f64 {
        if total_std_cost == 0.0 {
            return 0.0;
        }
        Self::round2((total_act_cost - total_std_cost) / total_std_cost * 100.0)
    }

    /// 四舍五入到 2 位小数（远离零方向的 .5 取整）
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
