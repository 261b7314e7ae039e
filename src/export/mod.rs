// ==========================================
// 成本差异分析系统 - 导出层
// ==========================================
// 职责: 差异结果表 → 电子表格文件
// ==========================================

pub mod error;
pub mod excel_exporter;

pub use error::{ExportError, ExportResult};
pub use excel_exporter::ExcelExporter;
