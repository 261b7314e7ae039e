// ==========================================
// 成本差异分析系统 - 核心库
// ==========================================
// 覆盖范围: 材料采购价格差异(PPV) / 材料用量差异
//           人工费率差异 / 人工效率差异 / 制造费用差异
// 系统定位: 一次性批处理报表 (单线程、同步)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 差异计算
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 报表层 - 文本报告
pub mod report;

// 导出层 - Excel 输出
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::VarianceStatus;

// 领域实体
pub use domain::{AlertItem, AnalysisSummary, ProductCostRecord, VarianceRecord};

// 配置
pub use config::AnalyzerConfig;

/// 系统版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
