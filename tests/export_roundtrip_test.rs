// ==========================================
// Excel 导出往返集成测试
// ==========================================
// 测试目标: 导出 → calamine 回读 → 数值/文本一致
// ==========================================

use calamine::{open_workbook, DataType, Reader, Xlsx};
use cost_variance_analyzer::domain::sample_data::sample_products;
use cost_variance_analyzer::engine::analyzer;
use cost_variance_analyzer::export::ExcelExporter;
use cost_variance_analyzer::logging;

const TOL: f64 = 1e-6;

/// 导出文件表头（列序固定）
const EXPECTED_HEADERS: [&str; 11] = [
    "Product",
    "Total_Std_Cost",
    "Total_Act_Cost",
    "PPV",
    "Usage_Var",
    "Labor_Rate_Var",
    "Labor_Eff_Var",
    "Overhead_Var",
    "Total_Variance",
    "Variance_%",
    "Status",
];

#[test]
fn test_export_then_reread_reproduces_all_columns() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cost_variance_report.xlsx");

    let rows = analyzer::analyze(&sample_products());
    ExcelExporter::new(&path).export(&rows).unwrap();

    // calamine 回读第一个工作表
    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let sheet_name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&sheet_name).unwrap();

    let mut sheet_rows = range.rows();

    // 表头行
    let header_row = sheet_rows.next().expect("缺少表头行");
    let headers: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
    assert_eq!(headers, EXPECTED_HEADERS);

    // 数据行: 行序与数值一致
    let mut count = 0;
    for (expected, actual) in rows.iter().zip(sheet_rows) {
        assert_eq!(actual[0].to_string(), expected.product);

        let numeric_expected = [
            expected.total_std_cost,
            expected.total_act_cost,
            expected.ppv,
            expected.usage_var,
            expected.labor_rate_var,
            expected.labor_eff_var,
            expected.overhead_var,
            expected.total_variance,
            expected.variance_pct,
        ];
        for (col, want) in numeric_expected.iter().enumerate() {
            let got = actual[col + 1]
                .get_float()
                .unwrap_or_else(|| panic!("第 {} 列不是数值", col + 1));
            assert!(
                (got - want).abs() < TOL,
                "{} 第 {} 列: 期望 {}, 实际 {}",
                expected.product,
                col + 1,
                want,
                got
            );
        }

        assert_eq!(actual[10].to_string(), expected.status.as_str());
        count += 1;
    }
    assert_eq!(count, rows.len(), "数据行数不一致");
}

#[test]
fn test_export_has_no_index_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let rows = analyzer::analyze(&sample_products());
    ExcelExporter::new(&path).export(&rows).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let sheet_name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&sheet_name).unwrap();

    // 首列就是 Product，总列数 11
    assert_eq!(range.width(), 11);
    let first_cell = range.get_value((0, 0)).unwrap();
    assert_eq!(first_cell.to_string(), "Product");
}
