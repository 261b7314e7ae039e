// ==========================================
// 成本差异分析系统 - 配置层
// ==========================================
// 职责: 报告参数管理（阈值、输出路径、标题）
// 存储: JSON 文件，缺省时使用内置默认值
// ==========================================

pub mod analyzer_config;

pub use analyzer_config::AnalyzerConfig;
