//! Grouping and averaging over the prospect database, producing the
//! ordered label/value series the chart renderers consume.

use crate::extract;
use crate::record::{CustomerRecord, Mode};
use crate::store;

/// The four aggregate charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    EndpointAverages,
    ServerAverages,
    NetworkDevices,
    BudgetComparison,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::EndpointAverages,
        ChartKind::ServerAverages,
        ChartKind::NetworkDevices,
        ChartKind::BudgetComparison,
    ];
}

/// One group on a chart: a label plus one value per series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub values: Vec<u64>,
}

/// A complete chart series, ready for rendering. `value_labels` runs
/// parallel to each point's `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub value_labels: Vec<&'static str>,
    pub points: Vec<ChartPoint>,
}

/// Size classification used for the endpoint and server averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    Sme,
    LargeEnterprise,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 2] = [SizeBucket::Sme, SizeBucket::LargeEnterprise];

    /// Case-insensitive substring classification. SME wins when a string
    /// somehow matches both; strings matching neither land in no bucket
    /// and are excluded from the averages (but not from the raw table).
    #[must_use]
    pub fn classify(company_size: &str) -> Option<Self> {
        let size = company_size.to_lowercase();
        if size.contains("sme") || size.contains("small") || size.contains("medium") {
            Some(Self::Sme)
        } else if size.contains("large") {
            Some(Self::LargeEnterprise)
        } else {
            None
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sme => "SME",
            Self::LargeEnterprise => "Large Enterprise",
        }
    }
}

/// Partitions `records` by `key_fn`. Groups appear in first-appearance
/// order, records within a group in source order. Records keyed `None`
/// are skipped entirely, never double-counted.
pub fn group_by<'a, R, K>(records: &'a [R], key_fn: K) -> Vec<(String, Vec<&'a R>)>
where
    K: Fn(&R) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<&R>)> = Vec::new();
    for record in records {
        let Some(key) = key_fn(record) else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }
    groups
}

/// Sum of `value_fn` over `records` divided by `max(len, 1)`, rounded to
/// the nearest integer. The guard makes the empty group average 0 instead
/// of dividing by zero.
pub fn average<'a, R: ?Sized>(records: &[&'a R], value_fn: impl Fn(&'a R) -> u64) -> u64 {
    let sum: u64 = records.iter().map(|record| value_fn(record)).sum();
    let count = records.len().max(1) as f64;
    (sum as f64 / count).round() as u64
}

/// First `n` records in source order. A prefix take, not a sort.
#[must_use]
pub fn top_n<R>(records: &[R], n: usize) -> &[R] {
    &records[..n.min(records.len())]
}

/// Builds the series for one chart kind over the selected mode.
///
/// Two dataset quirks are preserved from the dashboard this replaces:
/// the network chart falls back to the Advanced dataset when Basic is
/// selected (Basic records carry no network field), and the budget chart
/// always reads the Premium dataset.
#[must_use]
pub fn chart_series(mode: Mode, kind: ChartKind) -> ChartSeries {
    match kind {
        ChartKind::EndpointAverages => ChartSeries {
            title: "Number of Endpoints (SME vs Large Enterprise)",
            value_labels: vec!["Avg Endpoints"],
            points: size_bucket_averages(mode, |r| extract::first_integer(r.number_of_endpoints())),
        },
        ChartKind::ServerAverages => ChartSeries {
            title: "Number of Servers (SME vs Large Enterprise)",
            value_labels: vec!["Avg Servers"],
            points: size_bucket_averages(mode, |r| extract::first_integer(r.number_of_servers())),
        },
        ChartKind::NetworkDevices => ChartSeries {
            title: "Network Size (Routers & Switches)",
            value_labels: vec!["Routers", "Switches"],
            points: network_points(mode),
        },
        ChartKind::BudgetComparison => ChartSeries {
            title: "IT Budget Comparison (Top Companies)",
            value_labels: vec!["IT Budget"],
            points: budget_points(),
        },
    }
}

fn size_bucket_averages(
    mode: Mode,
    value_fn: impl Fn(&dyn CustomerRecord) -> u64,
) -> Vec<ChartPoint> {
    let records = store::records(mode);
    let customers = records.customers();
    let groups = group_by(&customers, |record| {
        SizeBucket::classify(record.company_size()).map(|bucket| bucket.label().to_string())
    });

    // Both buckets always appear, zero average when empty.
    SizeBucket::ALL
        .iter()
        .map(|bucket| {
            let members: Vec<&dyn CustomerRecord> = groups
                .iter()
                .find(|(label, _)| label == bucket.label())
                .map(|(_, members)| members.iter().map(|r| **r).collect())
                .unwrap_or_default();
            ChartPoint {
                label: bucket.label().to_string(),
                values: vec![average(&members, &value_fn)],
            }
        })
        .collect()
}

fn network_points(mode: Mode) -> Vec<ChartPoint> {
    let pairs: Vec<(&str, &str)> = match mode {
        // Basic records have no networkSize column.
        Mode::Basic | Mode::Advanced => store::advanced()
            .iter()
            .map(|r| (r.company_name, r.network_size))
            .collect(),
        Mode::Premium => store::premium()
            .iter()
            .map(|r| (r.company_name, r.network_size))
            .collect(),
    };

    top_n(&pairs, 6)
        .iter()
        .map(|(company, network)| ChartPoint {
            label: point_label(company),
            values: vec![
                extract::labeled_count(network, "routers"),
                extract::labeled_count(network, "switches"),
            ],
        })
        .filter(|point| point.values.iter().any(|v| *v > 0))
        .collect()
}

fn budget_points() -> Vec<ChartPoint> {
    top_n(store::premium(), 9)
        .iter()
        .map(|record| ChartPoint {
            label: point_label(record.company_name),
            values: vec![extract::currency_amount(record.it_budget_approx)],
        })
        .filter(|point| point.values[0] > 0)
        .collect()
}

/// Company name truncated at the first '(' and trimmed, "Unknown" when
/// nothing is left.
fn point_label(company: &str) -> String {
    let name = company.split('(').next().unwrap_or_default().trim();
    if name.is_empty() {
        "Unknown".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BasicRecord;

    fn record(company_size: &'static str, endpoints: &'static str) -> BasicRecord {
        BasicRecord {
            customer_name: "",
            company_name: "Test Co",
            company_size,
            industry_area: "",
            annual_revenue: "",
            geographics_footprint: "",
            key_contact: "",
            designation: "",
            email_address: "",
            phone_whatsapp: "",
            linkedin_profile: "",
            website_url: "",
            number_of_endpoints: endpoints,
            number_of_servers: "",
            cloud_footprint: "",
        }
    }

    #[test]
    fn test_classify_buckets() {
        assert_eq!(SizeBucket::classify("SME"), Some(SizeBucket::Sme));
        assert_eq!(
            SizeBucket::classify("Small business"),
            Some(SizeBucket::Sme)
        );
        assert_eq!(
            SizeBucket::classify("Medium enterprise"),
            Some(SizeBucket::Sme)
        );
        assert_eq!(
            SizeBucket::classify("Large Enterprise"),
            Some(SizeBucket::LargeEnterprise)
        );
        assert_eq!(SizeBucket::classify("Startup"), None);
    }

    #[test]
    fn test_average_empty_is_zero() {
        let empty: Vec<&BasicRecord> = Vec::new();
        assert_eq!(average(&empty, |_| 42), 0);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        let a = record("SME", "1");
        let b = record("SME", "2");
        let records = vec![&a, &b];
        // (1 + 2) / 2 = 1.5 rounds up.
        assert_eq!(
            average(&records, |r| extract::first_integer(r.number_of_endpoints)),
            2
        );
    }

    #[test]
    fn test_group_by_never_double_counts() {
        let records = [
            record("SME", "800"),
            record("Large Enterprise", "2500"),
            record("Startup", "100"),
        ];
        let groups = group_by(&records, |r| {
            SizeBucket::classify(r.company_size).map(|b| b.label().to_string())
        });
        let grouped: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert!(grouped <= records.len());
        assert_eq!(grouped, 2); // the startup matched no bucket
    }

    #[test]
    fn test_group_by_preserves_first_appearance_order() {
        let records = [
            record("Large Enterprise", "1"),
            record("SME", "2"),
            record("Large Enterprise", "3"),
        ];
        let groups = group_by(&records, |r| Some(r.company_size.to_string()));
        assert_eq!(groups[0].0, "Large Enterprise");
        assert_eq!(groups[1].0, "SME");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_top_n_is_a_prefix_take() {
        let records = [record("SME", "3"), record("SME", "1"), record("SME", "2")];
        let top = top_n(&records, 2);
        assert_eq!(top[0].number_of_endpoints, "3");
        assert_eq!(top[1].number_of_endpoints, "1");
        assert_eq!(top_n(&records, 99).len(), 3);
    }

    #[test]
    fn test_bucket_scenario_from_two_records() {
        let records = [record("Large Enterprise", "2500"), record("SME", "800")];
        let groups = group_by(&records, |r| {
            SizeBucket::classify(r.company_size).map(|b| b.label().to_string())
        });
        for (label, members) in &groups {
            let avg = average(members, |r| extract::first_integer(r.number_of_endpoints));
            match label.as_str() {
                "SME" => assert_eq!(avg, 800),
                "Large Enterprise" => assert_eq!(avg, 2500),
                other => panic!("unexpected bucket {other}"),
            }
        }
    }

    #[test]
    fn test_endpoint_averages_fixed_data() {
        let series = chart_series(Mode::Basic, ChartKind::EndpointAverages);
        assert_eq!(series.value_labels, vec!["Avg Endpoints"]);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].label, "SME");
        assert_eq!(series.points[0].values, vec![825]);
        assert_eq!(series.points[1].label, "Large Enterprise");
        assert_eq!(series.points[1].values, vec![4875]);
    }

    #[test]
    fn test_server_averages_exercise_rounding() {
        let series = chart_series(Mode::Basic, ChartKind::ServerAverages);
        assert_eq!(series.points[0].values, vec![40]);
        // 3450 / 16 = 215.625, rounds up.
        assert_eq!(series.points[1].values, vec![216]);
    }

    #[test]
    fn test_network_chart_basic_falls_back_to_advanced() {
        let basic = chart_series(Mode::Basic, ChartKind::NetworkDevices);
        let advanced = chart_series(Mode::Advanced, ChartKind::NetworkDevices);
        assert_eq!(basic.points, advanced.points);
        assert_eq!(basic.points.len(), 6);
        assert_eq!(basic.points[0].label, "Global Bank Corp");
        assert_eq!(basic.points[0].values, vec![50, 200]);
    }

    #[test]
    fn test_budget_chart_always_reads_premium() {
        for mode in Mode::ALL {
            let series = chart_series(mode, ChartKind::BudgetComparison);
            assert_eq!(series.points.len(), 9);
            assert_eq!(series.points[0].label, "Global Bank Corp");
            assert_eq!(series.points[0].values, vec![45]);
            let university = series
                .points
                .iter()
                .find(|p| p.label == "State University")
                .unwrap();
            assert_eq!(university.values, vec![38]);
            let grid = series
                .points
                .iter()
                .find(|p| p.label == "PowerGrid Energy")
                .unwrap();
            assert_eq!(grid.values, vec![72]);
        }
    }

    #[test]
    fn test_point_label_truncates_at_paren() {
        assert_eq!(point_label("Acme (Holdings)"), "Acme");
        assert_eq!(point_label("  "), "Unknown");
        assert_eq!(point_label("(anon)"), "Unknown");
    }
}
