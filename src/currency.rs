//! Currency Formatting
//!
//! USD→KRW display helpers. Won amounts are rounded to the nearest 10
//! (cash convention) except for tiny per-stream rates, which keep one
//! decimal place.

/// Shown by the block formatter while the rate is still loading
pub const BLOCK_PENDING_TEXT: &str = "환율 계산 중...";

/// Shown by the inline formatter while the rate is still loading
pub const INLINE_PENDING_TEXT: &str = "...";

/// Below this many won the inline formatter keeps one decimal
const SMALL_AMOUNT_KRW: f64 = 100.0;

/// Round half toward positive infinity (`Math.round` semantics)
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round a won amount to the nearest 10
pub fn round_to_ten_won(krw: f64) -> f64 {
    round_half_up(krw / 10.0) * 10.0
}

/// Won value of a USD price for prominent displays: `round(usd * rate / 10) * 10`
pub fn block_amount(usd: f64, rate: f64) -> i64 {
    round_to_ten_won(usd * rate) as i64
}

/// Block formatter: "약 ₩36,240", or the loading text when the rate is unknown
pub fn format_block(usd: f64, rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("약 ₩{}", group_thousands(block_amount(usd, rate))),
        None => BLOCK_PENDING_TEXT.to_string(),
    }
}

/// Inline formatter for table cells and per-stream rates.
///
/// Amounts under 100 won keep one decimal ("약 ₩5.8"); larger amounts are
/// rounded to 10 won like [`format_block`]. Returns `"..."` while pending.
pub fn format_inline(usd: f64, rate: Option<f64>) -> String {
    let Some(rate) = rate else {
        return INLINE_PENDING_TEXT.to_string();
    };
    let krw = usd * rate;
    if krw < SMALL_AMOUNT_KRW {
        format!("약 ₩{:.1}", krw)
    } else {
        format!("약 ₩{}", group_thousands(round_to_ten_won(krw) as i64))
    }
}

/// Fraction digits kept by the rate caption
const RATE_FRACTION_DIGITS: usize = 3;

/// Exchange rate for the "1 USD = N KRW" caption: grouped, at most 3 decimals.
///
/// Rounds the shortest decimal form of `rate` half away from zero, the way
/// `toLocaleString` does, so `1.0625` becomes "1.063".
pub fn format_rate(rate: f64) -> String {
    let shortest = format!("{}", rate.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let kept = frac_part.len().min(RATE_FRACTION_DIGITS);
    digits.extend(frac_part.bytes().take(kept));
    if frac_part.as_bytes().get(RATE_FRACTION_DIGITS).is_some_and(|d| *d >= b'5') {
        round_up_digits(&mut digits);
    }

    let int_len = digits.len() - kept;
    let int_digits = String::from_utf8_lossy(&digits[..int_len]).into_owned();
    let frac_digits = String::from_utf8_lossy(&digits[int_len..]);
    let frac_digits = frac_digits.trim_end_matches('0');

    let mut out = String::new();
    if rate < 0.0 && digits.iter().any(|d| *d != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(&int_digits));
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// Add one unit in the last place of an ASCII digit string, carrying left
fn round_up_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Dollar price with cents: "$24.99"
pub fn format_usd(usd: f64) -> String {
    format!("${:.2}", usd)
}

/// Per-unit dollar rate without padding: "$0.004"
pub fn format_unit_usd(usd: f64) -> String {
    format!("${}", usd)
}

/// Insert `,` every three digits: 1234567 -> "1,234,567"
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: Option<f64> = Some(1450.0);

    #[test]
    fn test_pending_placeholders() {
        assert_eq!(format_block(24.99, None), BLOCK_PENDING_TEXT);
        assert_eq!(format_inline(24.99, None), "...");
        assert_eq!(format_inline(0.0, None), "...");
    }

    #[test]
    fn test_block_plan_prices() {
        // 24.99 * 1450 = 36235.5 -> 3623.55 -> 3624 -> 36240
        assert_eq!(format_block(24.99, RATE), "약 ₩36,240");
        assert_eq!(format_block(44.99, RATE), "약 ₩65,240");
        assert_eq!(format_block(89.99, RATE), "약 ₩130,490");
    }

    #[test]
    fn test_block_amount_is_multiple_of_ten() {
        let rates = [1.0, 9.87, 1234.5, 1450.0, 1501.33];
        for rate in rates {
            for cents in (0..20_000).step_by(137) {
                let usd = cents as f64 / 100.0;
                let amount = block_amount(usd, rate);
                assert_eq!(amount % 10, 0, "usd={} rate={}", usd, rate);
                assert!((amount as f64 - usd * rate).abs() <= 5.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_inline_small_amounts_keep_one_decimal() {
        assert_eq!(format_inline(0.004, RATE), "약 ₩5.8");
        assert_eq!(format_inline(0.008, RATE), "약 ₩11.6");
        assert_eq!(format_inline(0.03, RATE), "약 ₩43.5");
        assert_eq!(format_inline(0.5, Some(199.0)), "약 ₩99.5");
        assert_eq!(format_inline(0.0, RATE), "약 ₩0.0");
    }

    #[test]
    fn test_inline_large_amounts_round_to_ten() {
        assert_eq!(format_inline(1.0, Some(100.0)), "약 ₩100");
        assert_eq!(format_inline(26.99, RATE), "약 ₩39,140");
        assert_eq!(format_inline(400.0, RATE), "약 ₩580,000");
        assert_eq!(format_inline(640.0, RATE), "약 ₩928,000");
        assert_eq!(format_inline(24.99, RATE), format_block(24.99, RATE));
    }

    #[test]
    fn test_negative_input_is_plain_arithmetic() {
        // Negative totals fall under the small-amount branch
        assert_eq!(format_inline(-1.0, RATE), "약 ₩-1450.0");
        // -3623.55 is nearest to -3624
        assert_eq!(block_amount(-24.99, 1450.0), -36240);
        assert_eq!(format_block(-24.99, RATE), "약 ₩-36,240");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to_ten_won(15.0), 20.0);
        assert_eq!(round_to_ten_won(14.9), 10.0);
        assert_eq!(round_to_ten_won(-15.0), -10.0);
        assert_eq!(round_to_ten_won(0.0), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-36230), "-36,230");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(24.99), "$24.99");
        assert_eq!(format_usd(640.0), "$640.00");
        assert_eq!(format_unit_usd(0.004), "$0.004");
        assert_eq!(format_unit_usd(0.03), "$0.03");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(1450.0), "1,450");
        assert_eq!(format_rate(1452.37), "1,452.37");
        assert_eq!(format_rate(1380.1234), "1,380.123");
        assert_eq!(format_rate(0.5), "0.5");
    }

    #[test]
    fn test_format_rate_rounds_half_away_from_zero() {
        // Exact binary tie: half-to-even would give "1.062"
        assert_eq!(format_rate(1.0625), "1.063");
        assert_eq!(format_rate(1380.0005), "1,380.001");
        assert_eq!(format_rate(1380.0004), "1,380");
        assert_eq!(format_rate(999.9995), "1,000");
        assert_eq!(format_rate(9.9996), "10");
        assert_eq!(format_rate(-1.0625), "-1.063");
        assert_eq!(format_rate(-0.0001), "0");
    }
}
