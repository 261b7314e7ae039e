// ==========================================
// 成本差异分析系统 - 主入口
// ==========================================
// 用法:
//   cost-variance-analyzer [input.csv|input.xlsx] [--config config.json]
//
// 未指定输入文件时使用内置样例数据集
// 退出码: 成功 0，任何致命错误（含导出失败）非零
// ==========================================

use anyhow::Context;
use cost_variance_analyzer::config::AnalyzerConfig;
use cost_variance_analyzer::domain::sample_data;
use cost_variance_analyzer::engine::analyzer;
use cost_variance_analyzer::export::ExcelExporter;
use cost_variance_analyzer::importer::ProductLoader;
use cost_variance_analyzer::logging;
use cost_variance_analyzer::report::TextReport;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("成本差异分析系统 - 标准成本 vs 实际成本");
    tracing::info!("系统版本: {}", cost_variance_analyzer::VERSION);
    tracing::info!("==================================================");

    let (input_path, config_path) = parse_args()?;

    // 加载配置（缺省时使用内置默认值）
    let config = match config_path {
        Some(path) => {
            tracing::info!("使用配置文件: {}", path.display());
            AnalyzerConfig::load(&path)?
        }
        None => AnalyzerConfig::default(),
    };

    // 装载产品成本数据
    let records = match input_path {
        Some(path) => ProductLoader::load(&path)
            .with_context(|| format!("装载输入文件失败: {}", path.display()))?,
        None => {
            tracing::info!("未指定输入文件，使用内置样例数据集");
            sample_data::sample_products()
        }
    };

    // 差异计算
    let rows = analyzer::analyze(&records);
    let summary = analyzer::summarize(&rows);
    let alerts = analyzer::collect_alerts(&rows, config.alert_threshold_pct);

    // 文本报告 → stdout
    print!("{}", TextReport::new(&config).render(&rows, &summary, &alerts));

    // Excel 导出（失败即致命，进程以非零退出）
    ExcelExporter::new(&config.output_path)
        .export(&rows)
        .context("Excel 导出失败")?;

    println!("\nExcel report saved: {}", config.output_path.display());
    Ok(())
}

/// 命令行参数解析
///
/// # 返回
/// - (输入文件路径, 配置文件路径)，均可为空
fn parse_args() -> anyhow::Result<(Option<PathBuf>, Option<PathBuf>)> {
    let mut input_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config 需要一个文件路径参数"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!(
                    "用法: cost-variance-analyzer [input.csv|input.xlsx] [--config config.json]"
                );
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                anyhow::bail!("未知参数: {}", other);
            }
            other => {
                if input_path.is_some() {
                    anyhow::bail!("只支持一个输入文件，多余参数: {}", other);
                }
                input_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok((input_path, config_path))
}
