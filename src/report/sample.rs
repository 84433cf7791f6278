//! Campaign results for 2025 Q4 against January 2026, split at 2026-01-09.

use super::record::{ContributionEntry, DailyEntry, Metrics, PerformanceRecord};
use chrono::NaiveDate;

impl PerformanceRecord {
    /// The built-in record, used unless `--data` supplies another.
    pub fn sample() -> Self {
        PerformanceRecord {
            pivot_date: NaiveDate::from_ymd_opt(2026, 1, 9).unwrap_or_default(),
            before_label: "2025 Q4".into(),
            after_label: "2026.01".into(),
            period_before: "2025 Q4 (10-11월)".into(),
            period_after: "2026년 1월 (분기점 이후)".into(),
            before: before(),
            after: after(),
            contribution: contribution(),
            daily: daily(),
            insights: insights(),
        }
    }
}

fn before() -> Metrics {
    Metrics::new()
        .with_wholes(&[("monthly_sends", 1_915_571)])
        .with_rates(&[
            ("view_rate", 65.1),
            ("click_rate", 7.9),
            ("signup_rate", 1.4),
            ("auth_rate", 50.5),
            ("roas", 92.0),
        ])
}

fn after() -> Metrics {
    Metrics::new()
        .with_wholes(&[
            ("total_cost", 77_000_000),
            ("total_sends", 1_362_014),
            ("total_views", 913_106),
            ("total_clicks", 148_828),
            ("total_signups", 37_340),
            ("total_auths", 21_215),
            // 종소세 (사업자)
            ("jongso_valid", 266),
            ("jongso_valid_amount", 1_371_373_454),
            ("jongso_apply", 135),
            ("jongso_apply_amount", 779_047_476),
            // 프리/근로
            ("free_apply", 1_702),
            ("free_apply_amount", 2_991_890_424),
            // 종부세
            ("jongbu_valid", 767),
            ("jongbu_valid_amount", 3_095_798_181),
            ("jongbu_apply", 330),
            ("jongbu_apply_amount", 1_089_996_772),
            // 양도세
            ("yangdo_valid", 720),
            ("yangdo_valid_amount", 6_480_588_639),
            ("yangdo_apply", 350),
            ("yangdo_apply_amount", 2_602_330_238),
            ("cac_signup", 2_062),
            ("cac_auth", 3_630),
            ("cac_valid", 51_782),
            ("cac_apply", 113_235),
            ("total_epa", 97_073_694),
        ])
        .with_rates(&[
            ("view_rate", 67.04),
            ("click_rate", 10.93),
            ("signup_rate", 2.74),
            ("auth_rate", 56.82),
            ("roas", 126.07),
            ("jongso_apply_rate", 50.75),
        ])
}

fn contribution() -> Vec<ContributionEntry> {
    [
        ("평균환급액(신청)", -19.74, 25.37),
        ("클릭율", -17.21, 22.11),
        ("가입율", -17.04, 21.90),
        ("신청율", -10.40, 13.37),
        ("기경정비율", -8.96, 11.51),
        ("열람율", -2.45, 3.14),
        ("유효고객율", -2.02, 2.60),
    ]
    .into_iter()
    .zip(1..)
    .map(|((indicator, change, contribution), rank)| ContributionEntry {
        indicator: indicator.into(),
        change,
        contribution,
        rank,
    })
    .collect()
}

fn daily() -> Vec<DailyEntry> {
    [
        ("01/06", 194_794, 65.81, 2.23, 55.34, 4_335),
        ("01/08", 199_939, 66.47, 2.29, 56.98, 4_582),
        ("01/13", 191_617, 67.18, 3.15, 57.73, 6_032),
        ("01/15", 200_206, 68.60, 3.42, 58.65, 6_846),
        ("01/19", 194_637, 68.04, 3.24, 57.91, 6_313),
        ("01/20", 177_952, 67.63, 3.23, 52.17, 5_749),
        ("01/22", 202_869, 65.63, 1.72, 58.94, 3_483),
    ]
    .into_iter()
    .map(
        |(date, sends, view_rate, signup_rate, auth_rate, signups)| DailyEntry {
            date: date.into(),
            sends,
            view_rate,
            signup_rate,
            auth_rate,
            signups,
        },
    )
    .collect()
}

fn insights() -> Vec<String> {
    [
        ":white_check_mark: *개선 지표*: 열람율(+1.9%p), 클릭율(+3.0%p), 가입율(+1.3%p), ROAS(+34.1%p)",
        ":x: *하락 지표*: 유효고객율(-4.4%p), 발송 모수 축소(-28.9%)",
        ":new: *신규 성과*: 프리/근로 EPA 29.9억, 종부세 유효환급 30.9억, 양도세 유효환급 64.8억",
        ":dart: *우선 과제*: 클릭율 A/B 테스트, 랜딩 UX 개선, 타겟 세그먼트 최적화",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_pre_ranked() {
        let ranks: Vec<u32> = PerformanceRecord::sample()
            .contribution
            .iter()
            .map(|c| c.rank)
            .collect();

        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sample_daily_sends_are_within_after_period() {
        let record = PerformanceRecord::sample();
        assert_eq!(record.daily.len(), 7);
        assert!(record.daily.iter().all(|d| d.date.starts_with("01/")));
    }
}
