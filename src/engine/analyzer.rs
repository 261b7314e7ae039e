// ==========================================
// 成本差异分析系统 - 差异分析器
// ==========================================
// 职责: 表级派生（逐行差异、全表汇总、关注清单）
// 红线: 不修改输入记录，输出为新建值
// ==========================================

use crate::domain::product::ProductCostRecord;
use crate::domain::types::VarianceStatus;
use crate::domain::variance::{AlertItem, AnalysisSummary, VarianceRecord};
use crate::engine::variance_core::VarianceCore;

/// 单产品差异派生
///
/// # 规则
/// - 五项差异按 VarianceCore 公式计算
/// - total_variance 为五项之和
/// - status 按 total_variance 符号判定
pub fn derive(record: &ProductCostRecord) -> VarianceRecord {
    let ppv = VarianceCore::purchase_price_variance(
        record.std_material_price,
        record.act_material_price,
        record.act_material_qty,
    );
    let usage_var = VarianceCore::usage_variance(
        record.std_material_qty,
        record.act_material_qty,
        record.std_material_price,
    );
    let labor_rate_var = VarianceCore::labor_rate_variance(
        record.std_labor_rate,
        record.act_labor_rate,
        record.act_labor_hours,
    );
    let labor_eff_var = VarianceCore::labor_efficiency_variance(
        record.std_labor_hours,
        record.act_labor_hours,
        record.std_labor_rate,
    );
    let overhead_var = VarianceCore::overhead_variance(record.std_overhead, record.act_overhead);

    let total_variance = ppv + usage_var + labor_rate_var + labor_eff_var + overhead_var;

    let total_std_cost = record.std_material_cost + record.std_labor_cost + record.std_overhead;
    let total_act_cost = record.act_material_cost + record.act_labor_cost + record.act_overhead;

    VarianceRecord {
        product: record.product.clone(),
        total_std_cost,
        total_act_cost,
        ppv,
        usage_var,
        labor_rate_var,
        labor_eff_var,
        overhead_var,
        total_variance,
        variance_pct: VarianceCore::variance_percentage(total_std_cost, total_act_cost),
        status: VarianceStatus::from_total_variance(total_variance),
    }
}

/// 全表差异派生（保持输入行序）
pub fn analyze(records: &[ProductCostRecord]) -> Vec<VarianceRecord> {
    records.iter().map(derive).collect()
}

/// 全表汇总
///
/// # 规则
/// - 净差异 = 各产品 total_variance 之和
/// - 净差异 ≥ 0 → FAVORABLE，否则 UNFAVORABLE
pub fn summarize(rows: &[VarianceRecord]) -> AnalysisSummary {
    let total_std_cost: f64 = rows.iter().map(|r| r.total_std_cost).sum();
    let total_act_cost: f64 = rows.iter().map(|r| r.total_act_cost).sum();
    let net_variance: f64 = rows.iter().map(|r| r.total_variance).sum();

    AnalysisSummary {
        total_std_cost,
        total_act_cost,
        net_variance,
        status: VarianceStatus::from_total_variance(net_variance),
    }
}

/// 管理层关注清单
///
/// # 规则
/// - |variance_pct| > threshold_pct 的产品入选（按已四舍五入的百分比）
/// - 保持输入行序
pub fn collect_alerts(rows: &[VarianceRecord], threshold_pct: f64) -> Vec<AlertItem> {
    rows.iter()
        .filter(|r| r.variance_pct.abs() > threshold_pct)
        .map(|r| AlertItem {
            product: r.product.clone(),
            variance_pct: r.variance_pct,
            status: r.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_data::sample_products;

    const TOL: f64 = 1e-6;

    fn control_board() -> ProductCostRecord {
        sample_products().remove(0)
    }

    // ==========================================
    // 测试 1: 单产品派生
    // ==========================================

    #[test]
    fn test_derive_control_board() {
        let row = derive(&control_board());

        // PPV = (12.00 - 12.50) × 108 = -54.00
        assert!((row.ppv - (-54.0)).abs() < TOL);
        // Usage = (100 - 108) × 12.00 = -96.00
        assert!((row.usage_var - (-96.0)).abs() < TOL);
        // 费率相等 → 0
        assert!(row.labor_rate_var.abs() < TOL);
        // Eff = (20 - 21) × 20.00 = -20.00
        assert!((row.labor_eff_var - (-20.0)).abs() < TOL);
        // Overhead = 200 - 210 = -10.00
        assert!((row.overhead_var - (-10.0)).abs() < TOL);

        assert!((row.total_variance - (-180.0)).abs() < TOL);
        assert_eq!(row.status, VarianceStatus::Unfavorable);

        // 成本汇总: 1200+400+200 / 1350+420+210
        assert!((row.total_std_cost - 1800.0).abs() < TOL);
        assert!((row.total_act_cost - 1980.0).abs() < TOL);
        // (1980-1800)/1800×100 = 10.00
        assert!((row.variance_pct - 10.0).abs() < TOL);
    }

    #[test]
    fn test_total_variance_is_sum_of_components() {
        for row in analyze(&sample_products()) {
            let expected =
                row.ppv + row.usage_var + row.labor_rate_var + row.labor_eff_var + row.overhead_var;
            assert!(
                (row.total_variance - expected).abs() < TOL,
                "{}: total_variance 不等于分项之和",
                row.product
            );
        }
    }

    #[test]
    fn test_status_matches_total_variance_sign() {
        for row in analyze(&sample_products()) {
            let expected = if row.total_variance >= 0.0 {
                VarianceStatus::Favorable
            } else {
                VarianceStatus::Unfavorable
            };
            assert_eq!(row.status, expected, "{}", row.product);
        }
    }

    #[test]
    fn test_analyze_preserves_input_order() {
        let records = sample_products();
        let rows = analyze(&records);
        assert_eq!(rows.len(), records.len());
        for (rec, row) in records.iter().zip(rows.iter()) {
            assert_eq!(rec.product, row.product);
        }
    }

    // ==========================================
    // 测试 2: 全表汇总
    // ==========================================

    #[test]
    fn test_summarize() {
        let rows = analyze(&sample_products());
        let summary = summarize(&rows);

        let expected_std: f64 = rows.iter().map(|r| r.total_std_cost).sum();
        let expected_act: f64 = rows.iter().map(|r| r.total_act_cost).sum();
        assert!((summary.total_std_cost - expected_std).abs() < TOL);
        assert!((summary.total_act_cost - expected_act).abs() < TOL);

        let expected_net: f64 = rows.iter().map(|r| r.total_variance).sum();
        assert!((summary.net_variance - expected_net).abs() < TOL);
        assert_eq!(
            summary.status,
            VarianceStatus::from_total_variance(expected_net)
        );
    }

    // ==========================================
    // 测试 3: 关注清单
    // ==========================================

    #[test]
    fn test_collect_alerts_threshold() {
        let rows = analyze(&sample_products());
        let alerts = collect_alerts(&rows, 2.0);

        // 清单与 |variance_pct| > 2 的行一一对应且保序
        let expected: Vec<&VarianceRecord> =
            rows.iter().filter(|r| r.variance_pct.abs() > 2.0).collect();
        assert_eq!(alerts.len(), expected.len());
        for (alert, row) in alerts.iter().zip(expected.iter()) {
            assert_eq!(alert.product, row.product);
            assert_eq!(alert.variance_pct, row.variance_pct);
            assert_eq!(alert.status, row.status);
        }
    }

    #[test]
    fn test_collect_alerts_none_within_threshold() {
        let rows = analyze(&sample_products());
        // 阈值拉高到全部落入 → 空清单
        let alerts = collect_alerts(&rows, 1000.0);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_collect_alerts_boundary_not_included() {
        // 恰好等于阈值不入选（严格大于）
        let mut row = derive(&control_board());
        row.variance_pct = 2.0;
        let alerts = collect_alerts(&[row], 2.0);
        assert!(alerts.is_empty());
    }
}
