// ==========================================
// 成本差异分析系统 - 产品数据装载器
// ==========================================
// 职责: 解析 → 映射 → 唯一键校验 的完整装载流程
// ==========================================

use crate::domain::product::ProductCostRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::collections::HashSet;
use std::path::Path;

pub struct ProductLoader;

impl ProductLoader {
    /// 从 CSV/Excel 文件装载产品成本记录
    ///
    /// # 流程
    /// 1. 文件解析（按扩展名选择解析器）
    /// 2. 字段映射与类型转换
    /// 3. 产品名唯一性校验
    ///
    /// # 返回
    /// - Ok(Vec<ProductCostRecord>): 保持文件行序
    /// - Err(ImportError): 首个失败行即终止（一次性批处理，无局部恢复）
    pub fn load<P: AsRef<Path>>(file_path: P) -> ImportResult<Vec<ProductCostRecord>> {
        let path = file_path.as_ref();
        tracing::info!("装载产品成本数据: {}", path.display());

        let raw_rows = UniversalFileParser.parse(path)?;
        if raw_rows.is_empty() {
            return Err(ImportError::EmptyInput);
        }

        let mapper = FieldMapper;
        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::with_capacity(raw_rows.len());

        for (idx, row) in raw_rows.iter().enumerate() {
            let row_number = idx + 1; // 数据行号（不含表头）
            let record = mapper.map_to_record(row, row_number)?;

            if !seen.insert(record.product.clone()) {
                return Err(ImportError::DuplicateProduct {
                    row: row_number,
                    product: record.product,
                });
            }

            records.push(record);
        }

        tracing::info!("装载完成: {} 条产品记录", records.len());
        Ok(records)
    }
}
