// ==========================================
// 成本差异分析系统 - 货币格式化
// ==========================================
// 口径: 2 位小数 + 千分位分隔 + 美元符号
// 负数形如 $-1,234.56（符号在 $ 之后）
// ==========================================

/// 金额文本（无货币符号），如 "17,950.00" / "-280.00"
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    // 按 2 位小数成文后再分组，避免进位与分组脱节（如 999.995 → 1,000.00）
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let grouped = group_thousands(int_part);
    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// 货币文本，如 "$17,950.00" / "$-54.00"
pub fn format_currency(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// 整数部分千分位分组
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
