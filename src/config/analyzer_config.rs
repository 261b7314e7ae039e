// ==========================================
// 成本差异分析系统 - 分析器配置
// ==========================================
// 支持部分覆写: JSON 中缺失的键回落到默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认关注阈值（差异百分比绝对值）
const DEFAULT_ALERT_THRESHOLD_PCT: f64 = 2.0;

/// 默认输出文件（工作目录下）
const DEFAULT_OUTPUT_PATH: &str = "cost_variance_report.xlsx";

/// 默认报告标题
const DEFAULT_REPORT_TITLE: &str = "COST VARIANCE ANALYSIS REPORT — MONTHLY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// 关注清单阈值: |Variance_%| 严格大于该值入选
    #[serde(default = "default_alert_threshold_pct")]
    pub alert_threshold_pct: f64,

    /// Excel 输出路径（已存在时覆盖）
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// 报告标题横幅文本
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_alert_threshold_pct() -> f64 {
    DEFAULT_ALERT_THRESHOLD_PCT
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            alert_threshold_pct: default_alert_threshold_pct(),
            output_path: default_output_path(),
            report_title: default_report_title(),
        }
    }
}

impl AnalyzerConfig {
    /// 从 JSON 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("读取配置文件失败 {}: {}", path.display(), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("解析配置文件失败 {}: {}", path.display(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.alert_threshold_pct, 2.0);
        assert_eq!(config.output_path, PathBuf::from("cost_variance_report.xlsx"));
        assert!(config.report_title.contains("COST VARIANCE"));
    }

    #[test]
    fn test_load_partial_json_falls_back_to_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"alert_threshold_pct": 5.0}}"#).unwrap();
        f.flush().unwrap();

        let config = AnalyzerConfig::load(f.path()).unwrap();
        assert_eq!(config.alert_threshold_pct, 5.0);
        // 未覆写键回落默认
        assert_eq!(config.output_path, PathBuf::from("cost_variance_report.xlsx"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(AnalyzerConfig::load("no_such_config.json").is_err());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        f.flush().unwrap();
        assert!(AnalyzerConfig::load(f.path()).is_err());
    }
}
