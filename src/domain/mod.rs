// ==========================================
// 成本差异分析系统 - 领域层
// ==========================================
// 职责: 实体与类型定义（无业务逻辑、无 I/O）
// ==========================================

pub mod product;
pub mod sample_data;
pub mod types;
pub mod variance;

// 重导出领域实体
pub use product::ProductCostRecord;
pub use variance::{AlertItem, AnalysisSummary, VarianceRecord};
