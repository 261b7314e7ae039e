// ==========================================
// 成本差异分析系统 - 导入层
// ==========================================
// 职责: 外部数据文件 → 领域记录
// 支持: CSV / Excel
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod product_loader;

// 重导出导入组件
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use product_loader::ProductLoader;
