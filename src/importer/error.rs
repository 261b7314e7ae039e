// ==========================================
// 成本差异分析系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(#[from] csv::Error),

    // ===== 数据映射错误 =====
    #[error("字段缺失 (行 {row}): 列 {field} 不存在或为空")]
    FieldMissing { row: usize, field: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析数值 {value}")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 数据质量错误 =====
    #[error("主键缺失 (行 {0}): Product 为空")]
    ProductNameMissing(usize),

    #[error("主键重复 (行 {row}): 产品 {product} 已存在")]
    DuplicateProduct { row: usize, product: String },

    #[error("输入为空: 文件无有效数据行")]
    EmptyInput,
}

/// 导入模块 Result 别名
pub type ImportResult<T> = Result<T, ImportError>;
