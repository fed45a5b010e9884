//! Форматирование цен и счётчиков для витрины

/// Число с пробелом между разрядами и фиксированным числом знаков после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234.567, 2), "1 234.57");
/// ```
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 1);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Цена в рублях: копейки показываются только если они есть
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(2990.0), "2 990 ₽");
/// assert_eq!(format_price(99.5), "99.50 ₽");
/// ```
pub fn format_price(value: f64) -> String {
    let decimals = if (value - value.round()).abs() < 0.005 { 0 } else { 2 };
    format!("{} ₽", format_grouped(value, decimals))
}
