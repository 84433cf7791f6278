//! Number formatting for the report.

const EOK: u64 = 100_000_000;
const MAN: u64 = 10_000;

/// Group digits in threes: `1362014` becomes `1,362,014`.
pub fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Compact won amount: hundreds of millions as `억` to one decimal place,
/// tens of thousands as a whole `만`, anything smaller grouped in full.
/// Rounds half up.
pub fn fmt_won(amount: u64) -> String {
    if amount >= EOK {
        let tenths = round_half_up(amount, EOK / 10);
        format!("{}.{}억", tenths / 10, tenths % 10)
    } else if amount >= MAN {
        format!("{}만", round_half_up(amount, MAN))
    } else {
        fmt_count(amount)
    }
}

fn round_half_up(n: u64, unit: u64) -> u64 {
    n / unit + u64::from(n % unit >= unit / 2)
}

/// A rate as entered, always with a fractional part: `126.0`, `67.04`.
pub fn fmt_rate(rate: f64) -> String {
    format!("{:?}", rate)
}

/// Percentage-point change between two rates as a Slack annotation.
pub fn fmt_delta(before: f64, after: f64) -> String {
    let diff = after - before;

    if diff > 0.0 {
        format!(":arrow_up: +{:.1}%p", diff)
    } else if diff < 0.0 {
        format!(":arrow_down: {:.1}%p", diff)
    } else {
        "→ 동일".into()
    }
}
