// ==========================================
// 成本差异分析系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    // 覆盖权限不足、磁盘满等底层 I/O 失败
    #[error("Excel 写入失败 ({path}): {source}")]
    XlsxWriteError {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// 导出模块 Result 别名
pub type ExportResult<T> = Result<T, ExportError>;
