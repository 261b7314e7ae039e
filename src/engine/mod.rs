// ==========================================
// 成本差异分析系统 - 引擎层
// ==========================================
// 职责: 差异计算（纯逻辑，无 I/O）
// ==========================================

pub mod analyzer;
pub mod variance_core;

pub use variance_core::VarianceCore;
