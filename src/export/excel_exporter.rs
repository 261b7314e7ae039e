// ==========================================
// 成本差异分析系统 - Excel 导出器
// ==========================================
// 职责: 差异结果表 → .xlsx（覆盖写，无索引列）
// 列与行序对齐文本报告（REPORT_COLUMNS）
// ==========================================

use crate::domain::variance::VarianceRecord;
use crate::export::error::{ExportError, ExportResult};
use crate::report::REPORT_COLUMNS;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub struct ExcelExporter {
    output_path: PathBuf,
}

impl ExcelExporter {
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// 导出差异结果表
    ///
    /// # 说明
    /// - 首行表头 + 每产品一行，保持输入行序
    /// - 目标文件已存在时直接覆盖
    /// - 写入失败（权限、磁盘满等）为致命错误，由调用方终止进程
    pub fn export(&self, rows: &[VarianceRecord]) -> ExportResult<()> {
        tracing::info!(
            "导出 Excel 报告: {} ({} 行)",
            self.output_path.display(),
            rows.len()
        );

        let mut workbook = Workbook::new();
        self.write_sheet(&mut workbook, rows)
            .and_then(|_| workbook.save(&self.output_path))
            .map_err(|source| ExportError::XlsxWriteError {
                path: self.output_path.display().to_string(),
                source,
            })?;

        Ok(())
    }

    fn write_sheet(
        &self,
        workbook: &mut Workbook,
        rows: &[VarianceRecord],
    ) -> Result<(), rust_xlsxwriter::XlsxError> {
        let header_format = Format::new().set_bold();
        let sheet = workbook.add_worksheet();

        // 表头行
        for (col, header) in REPORT_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        // 数据行
        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            sheet.write_string(r, 0, row.product.as_str())?;
            sheet.write_number(r, 1, row.total_std_cost)?;
            sheet.write_number(r, 2, row.total_act_cost)?;
            sheet.write_number(r, 3, row.ppv)?;
            sheet.write_number(r, 4, row.usage_var)?;
            sheet.write_number(r, 5, row.labor_rate_var)?;
            sheet.write_number(r, 6, row.labor_eff_var)?;
            sheet.write_number(r, 7, row.overhead_var)?;
            sheet.write_number(r, 8, row.total_variance)?;
            sheet.write_number(r, 9, row.variance_pct)?;
            sheet.write_string(r, 10, row.status.as_str())?;
        }

        // 产品列加宽，便于人工查看
        sheet.set_column_width(0, 26).ok();

        Ok(())
    }
}
