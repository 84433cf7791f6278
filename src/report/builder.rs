//! Lay out a [PerformanceRecord] as Slack blocks.
//!
//! The block sequence is fixed: header, dated context line, then six sections
//! separated by dividers (KPIs, conversion rates, channels, decline drivers,
//! CAC, insights), then a footer. Only the text inside varies with the record.

use super::format::{fmt_count, fmt_delta, fmt_rate, fmt_won};
use super::record::{Metrics, PerformanceRecord};
use crate::error::Failure;
use crate::slack::block::{Block, Section};
use chrono::{Datelike, NaiveDate};

pub const TITLE: &str = "마케팅 성과 분석 리포트";

const FOOTER: &str =
    ":robot_face: _PM Scraper Bot 마케팅 분석 | 데이터 소스: KakaoTalk TMS 캠페인_";

/// Label and metric name of each rate compared across the pivot, in display
/// order.
const CONVERSION_RATES: [(&str, &str); 4] = [
    ("열람율", "view_rate"),
    ("클릭율", "click_rate"),
    ("가입율", "signup_rate"),
    ("인증율", "auth_rate"),
];

const CAC_STAGES: [(&str, &str); 4] = [
    ("가입 CAC", "cac_signup"),
    ("인증 CAC", "cac_auth"),
    ("유효 CAC", "cac_valid"),
    ("신청 CAC", "cac_apply"),
];

const TOP_CONTRIBUTORS: usize = 3;

/// Build the full report. `today` stamps the context line and is the only
/// input besides the record.
///
/// Fails on the first metric the record lacks rather than rendering a gap.
pub fn build_blocks(record: &PerformanceRecord, today: NaiveDate) -> Result<Vec<Block>, Failure> {
    let a = &record.after;
    let b = &record.before;

    Ok(vec![
        Block::Header(TITLE.into()),
        Block::Context(fmt_context(record, today)),
        Block::Divider,
        Block::Section(kpi_section(b, a)?),
        Block::Divider,
        Block::Section(conversion_section(record)?),
        Block::Divider,
        Block::Section(channel_section(record)?),
        Block::Divider,
        Block::Section(contribution_section(record)),
        Block::Divider,
        Block::Section(cac_section(a)?),
        Block::Divider,
        Block::Section(insight_section(record)?),
        Block::Context(FOOTER.into()),
    ])
}

/// Plaintext used for notifications, where blocks aren't rendered.
pub fn fallback_text(record: &PerformanceRecord) -> String {
    format!(
        "{} - {} vs {} (분기점: {}/{})",
        TITLE,
        record.before_label,
        record.after_label,
        record.pivot_date.month(),
        record.pivot_date.day()
    )
}

fn fmt_context(record: &PerformanceRecord, today: NaiveDate) -> String {
    format!(
        ":calendar: {} | 분기점: *{}* | 비교: {} vs {}",
        today.format("%Y년 %m월 %d일"),
        record.pivot_date.format("%Y.%m.%d"),
        record.before_label,
        record.after_label
    )
}

fn field<T: std::fmt::Display>(label: &str, value: T) -> String {
    format!("*{}*\n{}", label, value)
}

fn kpi_section(b: &Metrics, a: &Metrics) -> Result<Section, Failure> {
    let roas = a.rate("roas")?;

    Ok(Section::with_fields(
        "*:bar_chart: 핵심 KPI (Before vs After 분기점)*",
        vec![
            field("총 집행 비용", fmt_won(a.amount("total_cost")?)),
            field("총 발송", fmt_count(a.amount("total_sends")?)),
            field(
                "ROAS",
                format!("{}% {}", fmt_rate(roas), fmt_delta(b.rate("roas")?, roas)),
            ),
            field("통합 EPA", fmt_won(a.amount("total_epa")?)),
        ],
    ))
}

fn conversion_section(record: &PerformanceRecord) -> Result<Section, Failure> {
    let (b, a) = (&record.before, &record.after);
    let fields = CONVERSION_RATES
        .iter()
        .map(|(label, name)| -> Result<String, Failure> {
            let (before, after) = (b.rate(name)?, a.rate(name)?);
            Ok(field(
                label,
                format!(
                    "{}% → {}% {}",
                    fmt_rate(before),
                    fmt_rate(after),
                    fmt_delta(before, after)
                ),
            ))
        })
        .collect::<Result<Vec<_>, Failure>>()?;

    Ok(Section::with_fields(
        format!(
            "*:chart_with_upwards_trend: 주요 전환율 변화 ({} -> {})*",
            record.before_label, record.after_label
        ),
        fields,
    ))
}

fn channel_section(record: &PerformanceRecord) -> Result<Section, Failure> {
    let a = &record.after;
    let lines = [
        format!(
            ":one: *종소세 (사업자)*: 유효 {}명 | 신청 {}명 ({}%) | 신청환급 {}",
            fmt_count(a.amount("jongso_valid")?),
            fmt_count(a.amount("jongso_apply")?),
            fmt_rate(a.rate("jongso_apply_rate")?),
            fmt_won(a.amount("jongso_apply_amount")?)
        ),
        format!(
            ":two: *프리/근로*: 신청 {}명 | 신청환급 {}",
            fmt_count(a.amount("free_apply")?),
            fmt_won(a.amount("free_apply_amount")?)
        ),
        format!(
            ":three: *종부세*: 유효 {}명 | 신청 {}명 | 유효환급 {}",
            fmt_count(a.amount("jongbu_valid")?),
            fmt_count(a.amount("jongbu_apply")?),
            fmt_won(a.amount("jongbu_valid_amount")?)
        ),
        format!(
            ":four: *양도세*: 유효 {}명 | 신청 {}명 | 유효환급 {}",
            fmt_count(a.amount("yangdo_valid")?),
            fmt_count(a.amount("yangdo_apply")?),
            fmt_won(a.amount("yangdo_valid_amount")?)
        ),
    ];

    Ok(Section::text(format!(
        "*:moneybag: 채널별 EPA / 신청 성과 ({})*\n{}",
        record.after_label,
        lines.join("\n")
    )))
}

/// The entries are taken in the order given; the record is expected to be
/// ranked already.
fn contribution_section(record: &PerformanceRecord) -> Section {
    let lines: Vec<String> = record
        .contribution
        .iter()
        .take(TOP_CONTRIBUTORS)
        .map(|c| {
            format!(
                "{}. *{}*: {:+.1}% (기여도 {:.1}%)",
                c.rank, c.indicator, c.change, c.contribution
            )
        })
        .collect();

    Section::text(format!(
        "*:warning: 하락 기여도 TOP 3 (EPA 감소 요인)*\n{}",
        lines.join("\n")
    ))
}

fn cac_section(a: &Metrics) -> Result<Section, Failure> {
    let fields = CAC_STAGES
        .iter()
        .map(|(label, name)| -> Result<String, Failure> {
            Ok(field(label, format!("{}원", fmt_count(a.amount(name)?))))
        })
        .collect::<Result<Vec<_>, Failure>>()?;

    Ok(Section::with_fields("*:receipt: CAC (고객획득비용)*", fields))
}

fn insight_section(record: &PerformanceRecord) -> Result<Section, Failure> {
    if record.insights.is_empty() {
        return Err(Failure::MissingMetric("insights".into()));
    }

    Ok(Section::text(format!(
        "*:bulb: 핵심 인사이트*\n\n{}",
        record.insights.join("\n")
    )))
}
