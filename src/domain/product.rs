// ==========================================
// 成本差异分析系统 - 产品成本领域模型
// ==========================================
// 对齐: 导入文件列名（Std_Material_Cost / Act_Material_Cost / ...）
// 用途: 导入层写入，引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductCostRecord - 产品标准/实际成本记录
// ==========================================
// 每个产品名一条记录（唯一键: product）
// 创建后不可变，派生字段由引擎层另建 VarianceRecord 承载
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCostRecord {
    // ===== 主键 =====
    pub product: String, // 产品名称（唯一）

    // ===== 材料 =====
    pub std_material_cost: f64,  // 标准材料成本
    pub act_material_cost: f64,  // 实际材料成本
    pub std_material_qty: f64,   // 标准材料用量
    pub act_material_qty: f64,   // 实际材料用量
    pub std_material_price: f64, // 标准材料单价
    pub act_material_price: f64, // 实际材料单价

    // ===== 人工 =====
    pub std_labor_cost: f64,  // 标准人工成本
    pub act_labor_cost: f64,  // 实际人工成本
    pub std_labor_hours: f64, // 标准工时
    pub act_labor_hours: f64, // 实际工时
    pub std_labor_rate: f64,  // 标准工时费率
    pub act_labor_rate: f64,  // 实际工时费率

    // ===== 制造费用 =====
    pub std_overhead: f64, // 标准制造费用
    pub act_overhead: f64, // 实际制造费用
}
