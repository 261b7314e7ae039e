// ==========================================
// 成本差异分析系统 - 文本报告渲染
// ==========================================
// 结构: 标题横幅 / 明细表 / 汇总区 / 关注清单
// 列宽按内容自适应，数值列右对齐
// ==========================================

use crate::config::AnalyzerConfig;
use crate::domain::variance::{AlertItem, AnalysisSummary, VarianceRecord};
use crate::report::currency::{format_amount, format_currency};
use crate::report::REPORT_COLUMNS;

/// 横幅分隔线宽度
const BANNER_WIDTH: usize = 70;

pub struct TextReport<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> TextReport<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    /// 渲染完整报告
    pub fn render(
        &self,
        rows: &[VarianceRecord],
        summary: &AnalysisSummary,
        alerts: &[AlertItem],
    ) -> String {
        let mut out = String::new();

        self.render_banner(&mut out);
        self.render_table(&mut out, rows);
        self.render_summary(&mut out, summary);
        self.render_alerts(&mut out, alerts);

        out
    }

    // ===== 标题横幅 =====
    fn render_banner(&self, out: &mut String) {
        let bar = "=".repeat(BANNER_WIDTH);
        out.push_str(&bar);
        out.push('\n');
        out.push_str(
            format!("{:^width$}", self.config.report_title, width = BANNER_WIDTH).trim_end(),
        );
        out.push('\n');
        out.push_str(&bar);
        out.push('\n');
    }

    // ===== 明细表 =====
    fn render_table(&self, out: &mut String, rows: &[VarianceRecord]) {
        // 单元格文本（与表头同序）
        let cells: Vec<Vec<String>> = rows.iter().map(Self::row_cells).collect();

        // 列宽 = max(表头宽, 各单元格宽)
        let widths: Vec<usize> = REPORT_COLUMNS
            .iter()
            .enumerate()
            .map(|(col, header)| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(header.len())
            })
            .collect();

        // 表头行
        let header_line: Vec<String> = REPORT_COLUMNS
            .iter()
            .enumerate()
            .map(|(col, header)| Self::pad(header, widths[col], col == 0))
            .collect();
        out.push_str(header_line.join("  ").trim_end());
        out.push('\n');

        // 数据行（保持输入行序）
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, cell)| Self::pad(cell, widths[col], col == 0))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        }
    }

    /// 单行 → 11 列单元格文本
    fn row_cells(row: &VarianceRecord) -> Vec<String> {
        vec![
            row.product.clone(),
            format_currency(row.total_std_cost),
            format_currency(row.total_act_cost),
            format_currency(row.ppv),
            format_currency(row.usage_var),
            format_currency(row.labor_rate_var),
            format_currency(row.labor_eff_var),
            format_currency(row.overhead_var),
            format_currency(row.total_variance),
            format!("{:.2}", row.variance_pct),
            row.status.as_str().to_string(),
        ]
    }

    /// 列对齐: Product 左对齐，其余右对齐
    fn pad(cell: &str, width: usize, left_align: bool) -> String {
        if left_align {
            format!("{:<width$}", cell, width = width)
        } else {
            format!("{:>width$}", cell, width = width)
        }
    }

    // ===== 汇总区 =====
    fn render_summary(&self, out: &mut String, summary: &AnalysisSummary) {
        let bar = "=".repeat(BANNER_WIDTH);
        out.push('\n');
        out.push_str(&bar);
        out.push('\n');
        out.push_str("SUMMARY\n");
        out.push_str(&format!(
            "  Total Standard Cost : ${:>12}\n",
            format_amount(summary.total_std_cost)
        ));
        out.push_str(&format!(
            "  Total Actual Cost   : ${:>12}\n",
            format_amount(summary.total_act_cost)
        ));
        out.push_str(&format!(
            "  Net Variance        : ${:>12}  [{}]\n",
            format_amount(summary.net_variance),
            summary.status.summary_tag()
        ));
        out.push_str(&bar);
        out.push('\n');
    }

    // ===== 关注清单 =====
    fn render_alerts(&self, out: &mut String, alerts: &[AlertItem]) {
        out.push('\n');
        out.push_str(&format!(
            "ITEMS REQUIRING MANAGEMENT ATTENTION (>{}% variance):\n",
            self.config.alert_threshold_pct
        ));

        if alerts.is_empty() {
            out.push_str(&format!(
                "  None - all products within {}% threshold.\n",
                self.config.alert_threshold_pct
            ));
            return;
        }

        for alert in alerts {
            out.push_str(&format!(
                "  - {}: {:.2}% [{}]\n",
                alert.product, alert.variance_pct, alert.status
            ));
        }
    }
}
