/// Форматирует число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Цена для логов: округлённая, с разделителями
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price < 0.0 {
        return price.to_string();
    }
    format_number(price.round() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(15000.0), "15,000");
        assert_eq!(format_price(1499.6), "1,500");
        assert_eq!(format_price(-5.0), "-5");
    }
}
