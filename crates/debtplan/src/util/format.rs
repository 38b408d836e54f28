/// Group the digits of a whole dollar amount with commas
fn group_thousands(dollars: i64) -> String {
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value
pub fn format_currency(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as i64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;

    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(dollars), cents)
}

/// Format an annual percentage rate that is already expressed in percent
pub fn format_rate(rate_pct: f64) -> String {
    format!("{:.2}%", rate_pct)
}

/// Format a month count as years and months (e.g. "2 yrs 3 mos")
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let rem = months % 12;
    match (years, rem) {
        (0, m) => format!("{} mo{}", m, if m == 1 { "" } else { "s" }),
        (y, 0) => format!("{} yr{}", y, if y == 1 { "" } else { "s" }),
        (y, m) => format!(
            "{} yr{} {} mo{}",
            y,
            if y == 1 { "" } else { "s" },
            m,
            if m == 1 { "" } else { "s" }
        ),
    }
}
