// ==========================================
// 成本差异分析系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → ProductCostRecord 映射 + 类型转换
// 列名对齐导出文件口径（Std_Material_Cost / Act_Material_Cost / ...）
// ==========================================

use crate::domain::product::ProductCostRecord;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    /// 单行映射
    ///
    /// # 参数
    /// - row: 解析后的原始行（列名 → 文本值）
    /// - row_number: 数据行号（从 1 开始，用于错误定位）
    pub fn map_to_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<ProductCostRecord> {
        // 主键
        let product = self
            .get_string(row, "Product")
            .ok_or(ImportError::ProductNameMissing(row_number))?;

        Ok(ProductCostRecord {
            product,

            // 材料
            std_material_cost: self.parse_f64(row, "Std_Material_Cost", row_number)?,
            act_material_cost: self.parse_f64(row, "Act_Material_Cost", row_number)?,
            std_material_qty: self.parse_f64(row, "Std_Material_Qty", row_number)?,
            act_material_qty: self.parse_f64(row, "Act_Material_Qty", row_number)?,
            std_material_price: self.parse_f64(row, "Std_Material_Price", row_number)?,
            act_material_price: self.parse_f64(row, "Act_Material_Price", row_number)?,

            // 人工
            std_labor_cost: self.parse_f64(row, "Std_Labor_Cost", row_number)?,
            act_labor_cost: self.parse_f64(row, "Act_Labor_Cost", row_number)?,
            std_labor_hours: self.parse_f64(row, "Std_Labor_Hours", row_number)?,
            act_labor_hours: self.parse_f64(row, "Act_Labor_Hours", row_number)?,
            std_labor_rate: self.parse_f64(row, "Std_Labor_Rate", row_number)?,
            act_labor_rate: self.parse_f64(row, "Act_Labor_Rate", row_number)?,

            // 制造费用
            std_overhead: self.parse_f64(row, "Std_Overhead", row_number)?,
            act_overhead: self.parse_f64(row, "Act_Overhead", row_number)?,
        })
    }

    /// 提取非空字符串字段
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    /// 解析浮点数字段（必填）
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        let raw = self.get_string(row, key).ok_or_else(|| ImportError::FieldMissing {
            row: row_number,
            field: key.to_string(),
        })?;

        // 容忍千分位逗号（人工编辑的表格常见）
        let cleaned = raw.replace(',', "");
        cleaned
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                value: raw,
            })
    }
}
