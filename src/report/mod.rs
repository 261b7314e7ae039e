// ==========================================
// 成本差异分析系统 - 报表层
// ==========================================
// 职责: 固定宽度文本报告（stdout 输出）
// ==========================================

pub mod currency;
pub mod text_report;

pub use text_report::TextReport;

/// 报表/导出列顺序（与导出文件表头一致）
pub const REPORT_COLUMNS: [&str; 11] = [
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
