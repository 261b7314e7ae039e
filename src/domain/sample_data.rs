// ==========================================
// 成本差异分析系统 - 内置样例数据
// ==========================================
// 场景: 通用电子制造产品线（5 个产品）
// 用途: 未指定输入文件时的默认数据集
// ==========================================

use crate::domain::product::ProductCostRecord;

/// 内置样例数据集
///
/// 数据为静态完整数据，无缺失值，标准总成本均非零
pub fn sample_products() -> Vec<ProductCostRecord> {
    vec![
        ProductCostRecord {
            product: "Control Board Assembly".to_string(),
            std_material_cost: 1200.0,
            act_material_cost: 1350.0,
            std_material_qty: 100.0,
            act_material_qty: 108.0,
            std_material_price: 12.00,
            act_material_price: 12.50,
            std_labor_cost: 400.0,
            act_labor_cost: 420.0,
            std_labor_hours: 20.0,
            act_labor_hours: 21.0,
            std_labor_rate: 20.00,
            act_labor_rate: 20.00,
            std_overhead: 200.0,
            act_overhead: 210.0,
        },
        ProductCostRecord {
            product: "Power Supply Unit".to_string(),
            std_material_cost: 850.0,
            act_material_cost: 820.0,
            std_material_qty: 80.0,
            act_material_qty: 78.0,
            std_material_price: 10.63,
            act_material_price: 10.51,
            std_labor_cost: 300.0,
            act_labor_cost: 285.0,
            std_labor_hours: 15.0,
            act_labor_hours: 14.0,
            std_labor_rate: 20.00,
            act_labor_rate: 20.36,
            std_overhead: 150.0,
            act_overhead: 145.0,
        },
        ProductCostRecord {
            product: "Sensor Module".to_string(),
            std_material_cost: 3400.0,
            act_material_cost: 3650.0,
            std_material_qty: 200.0,
            act_material_qty: 215.0,
            std_material_price: 17.00,
            act_material_price: 16.98,
            std_labor_cost: 900.0,
            act_labor_cost: 950.0,
            std_labor_hours: 45.0,
            act_labor_hours: 47.0,
            std_labor_rate: 20.00,
            act_labor_rate: 20.21,
            std_overhead: 450.0,
            act_overhead: 480.0,
        },
        ProductCostRecord {
            product: "Communication Interface".to_string(),
            std_material_cost: 2100.0,
            act_material_cost: 2300.0,
            std_material_qty: 150.0,
            act_material_qty: 160.0,
            std_material_price: 14.00,
            act_material_price: 14.38,
            std_labor_cost: 600.0,
            act_labor_cost: 580.0,
            std_labor_hours: 30.0,
            act_labor_hours: 29.0,
            std_labor_rate: 20.00,
            act_labor_rate: 20.00,
            std_overhead: 300.0,
            act_overhead: 310.0,
        },
        ProductCostRecord {
            product: "Motor Drive Assembly".to_string(),
            std_material_cost: 5600.0,
            act_material_cost: 5400.0,
            std_material_qty: 300.0,
            act_material_qty: 290.0,
            std_material_price: 18.67,
            act_material_price: 18.62,
            std_labor_cost: 1500.0,
            act_labor_cost: 1600.0,
            std_labor_hours: 75.0,
            act_labor_hours: 80.0,
            std_labor_rate: 20.00,
            act_labor_rate: 20.00,
            std_overhead: 750.0,
            act_overhead: 730.0,
        },
    ]
}
