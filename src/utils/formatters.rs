use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats an 11-digit CPF as `123.456.789-00`.
///
/// Non-digit characters are stripped before formatting; anything that is not
/// 11 digits long is returned unchanged so malformed records still render.
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Formats a monetary amount as a pt-BR currency string, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {},{}", int_grouped, frac_part)
    } else {
        format!("R$ {},{}", int_grouped, frac_part)
    }
}

/// Formats a date as `dd/mm/yyyy`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_cpf() {
        assert_eq!(format_cpf("12345678900"), "123.456.789-00");
        assert_eq!(format_cpf("123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn malformed_cpf_passes_through() {
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("abc"), "abc");
    }

    #[test]
    fn formats_brl_with_grouping() {
        assert_eq!(format_brl(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_brl(dec!(0.5)), "R$ 0,50");
        assert_eq!(format_brl(dec!(1000000)), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec!(-987.1)), "-R$ 987,10");
    }

    #[test]
    fn formats_date_br() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date_br(date), "05/03/2024");
    }
}
