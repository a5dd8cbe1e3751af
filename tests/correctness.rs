//! Correctness and invariant tests for freqstats
//!
//! These tests check the properties every computation must satisfy and the
//! worked scenarios for each metric. They complement the unit tests in each
//! module by going through the public API only.
//!
//! Run with: cargo test --test correctness --features full

// Require all collaborator modules
#[cfg(not(all(feature = "input", feature = "report", feature = "chart")))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use freqstats::chart::{ChartKind, ChartSpec};
use freqstats::dataset::{Dataset, FrequencyEntry};
use freqstats::error::StatsError;
use freqstats::input::{parse, parse_observations, parse_table, DataKind, ParseError};
use freqstats::report::Report;
use freqstats::statistics::{
    compute, compute_named, mean, median, mode, parse_selection, sample_skewness, skewness,
    std_dev, variance, Metric, Mode,
};

fn ds(pairs: &[(f64, u64)]) -> Dataset {
    Dataset::from_pairs(pairs).unwrap()
}

// ============================================================================
// Dataset
// ============================================================================

mod dataset {
    use super::*;

    #[test]
    fn total_frequency_is_sum_of_frequencies() {
        let data = ds(&[(1.5, 4), (-2.0, 9), (7.0, 1), (3.25, 6)]);
        let sum: u64 = data.entries().iter().map(FrequencyEntry::frequency).sum();

        assert_eq!(data.total_frequency(), sum);
        assert_eq!(data.total_frequency(), 20);
    }

    #[test]
    fn raw_and_grouped_forms_agree() {
        let raw = Dataset::from_observations(&[3.0, 1.0, 3.0, 2.0, 3.0, 1.0]).unwrap();
        let grouped = ds(&[(1.0, 2), (2.0, 1), (3.0, 3)]);

        assert_eq!(raw, grouped);
        assert_eq!(
            compute(&raw, &Metric::ALL).unwrap(),
            compute(&grouped, &Metric::ALL).unwrap()
        );
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert!(matches!(
            Dataset::from_pairs(&[(1.0, 2), (2.0, 0)]),
            Err(StatsError::InvalidDataset(_))
        ));
    }
}

// ============================================================================
// Engine
// ============================================================================

mod engine {
    use super::*;

    #[test]
    fn scenario_skewed_pair() {
        // [{2,3},{4,1}]
        let data = ds(&[(2.0, 3), (4.0, 1)]);
        let record = compute(&data, &Metric::ALL).unwrap();

        assert_eq!(data.total_frequency(), 4);
        assert_eq!(record.mean, Some(2.5));
        assert_eq!(record.median, Some(2.0));
        assert_eq!(record.mode, Some(Mode::Values(vec![2.0])));
        assert_eq!(record.variance, Some(0.75));
        let sd = record.std_dev.unwrap();
        assert!((sd - 0.866).abs() < 1e-3, "stdDev: {}", sd);
    }

    #[test]
    fn scenario_even_boundary_median() {
        let data = ds(&[(1.0, 1), (2.0, 1)]);
        assert_eq!(median(&data).unwrap(), 1.5);
    }

    #[test]
    fn boundary_averages_with_next_distinct_value() {
        // cumulative [1, 2, 4], N/2 = 2 reached exactly at value 2
        let data = ds(&[(1.0, 1), (2.0, 1), (3.0, 2)]);
        assert_eq!(median(&data).unwrap(), 2.5);

        // cumulative [3, 4], N/2 = 2 falls inside the first block
        assert_eq!(median(&ds(&[(5.0, 3), (9.0, 1)])).unwrap(), 5.0);
    }

    #[test]
    fn single_distinct_value() {
        // 0.1, 0.3 and 1.1 do not survive v·f/f unchanged
        for value in [-3.5, 0.1, 0.3, 1.1] {
            for frequency in [1, 2, 3, 6, 17] {
                let data = ds(&[(value, frequency)]);

                assert_eq!(mean(&data).unwrap(), value);
                assert_eq!(variance(&data).unwrap(), 0.0);
                assert_eq!(std_dev(&data).unwrap(), 0.0);
                assert!(matches!(
                    skewness(&data),
                    Err(StatsError::UndefinedStatistic { .. })
                ));

                let record = compute(&data, &Metric::ALL).unwrap();
                assert_eq!(record.mean, Some(value));
                assert_eq!(record.variance, Some(0.0));
                assert!(matches!(
                    record.skewness,
                    Some(Err(StatsError::UndefinedStatistic { .. }))
                ));
            }
        }
    }

    #[test]
    fn extreme_magnitudes_never_yield_infinity() {
        let data = ds(&[(1e308, 2), (1.7e308, 1)]);

        let m = mean(&data).unwrap();
        assert!(m.is_finite());
        assert!(m > 1e308 && m < 1.7e308, "mean: {}", m);
        assert!(matches!(
            skewness(&data),
            Err(StatsError::UndefinedStatistic { .. })
        ));
        assert!(matches!(
            variance(&data),
            Err(StatsError::UndefinedStatistic { .. })
        ));
        assert!(matches!(
            compute(&data, &Metric::ALL),
            Err(StatsError::UndefinedStatistic { .. })
        ));

        // Negative extremes overflow the other way
        let data = ds(&[(-1.7e308, 1), (-1e308, 2)]);
        assert!(mean(&data).unwrap().is_finite());
    }

    #[test]
    fn median_matches_list_median_for_unit_frequencies() {
        let lists: [&[f64]; 4] = [
            &[4.0],
            &[9.0, 1.0],
            &[5.0, 3.0, 8.0, 1.0, 2.0],
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0],
        ];

        for list in lists {
            let mut sorted = list.to_vec();
            sorted.sort_by(|a, b| a.total_cmp(b));
            let n = sorted.len();
            let expected = if n % 2 == 1 {
                sorted[n / 2]
            } else {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            };

            let data = Dataset::from_observations(list).unwrap();
            assert_eq!(median(&data).unwrap(), expected, "list: {:?}", list);
        }
    }

    #[test]
    fn mode_with_tie() {
        let data = ds(&[(1.0, 2), (2.0, 2), (3.0, 1)]);
        assert_eq!(mode(&data).unwrap(), Mode::Values(vec![1.0, 2.0]));
    }

    #[test]
    fn mode_uniform_frequency() {
        let data = ds(&[(1.0, 1), (2.0, 1), (3.0, 1)]);
        assert_eq!(mode(&data).unwrap(), Mode::NoMode);
    }

    #[test]
    fn std_dev_is_exact_sqrt_of_variance() {
        let datasets = [
            ds(&[(2.0, 3), (4.0, 1)]),
            ds(&[(0.1, 1), (0.2, 1), (0.3, 1)]),
            ds(&[(1e-3, 5), (1e3, 2), (-7.5, 11)]),
            ds(&[(9.0, 1)]),
        ];

        for data in &datasets {
            let record = compute(data, &[Metric::Variance, Metric::StdDev]).unwrap();
            assert_eq!(
                record.std_dev.unwrap().to_bits(),
                record.variance.unwrap().sqrt().to_bits()
            );
        }
    }

    #[test]
    fn shared_denominator() {
        // Σf·(x−mean) is zero only when the mean uses the same N
        let data = ds(&[(1.0, 3), (4.0, 2), (10.0, 1)]);
        let m = mean(&data).unwrap();
        let deviation: f64 = data
            .entries()
            .iter()
            .map(|e| e.frequency() as f64 * (e.value() - m))
            .sum();
        assert!(deviation.abs() < 1e-9);

        let n = data.total_frequency() as f64;
        let var = variance(&data).unwrap();
        let second: f64 = data
            .entries()
            .iter()
            .map(|e| e.frequency() as f64 * (e.value() - m).powi(2))
            .sum();
        assert!((var - second / n).abs() < 1e-12);
    }

    #[test]
    fn sample_skewness_differs_from_population() {
        let data = Dataset::from_observations(&[1.0, 2.0, 3.0, 10.0]).unwrap();
        let population = skewness(&data).unwrap();
        let sample = sample_skewness(&data).unwrap();

        // Same sign, sample form is larger in magnitude for small N
        assert!(population > 0.0);
        assert!(sample > population);
    }

    #[test]
    fn output_is_reproducible() {
        let a = ds(&[(0.3, 2), (0.1, 5), (100.0, 1), (0.7, 3)]);
        let b = ds(&[(100.0, 1), (0.7, 3), (0.3, 2), (0.1, 5)]);

        let ra = compute(&a, &Metric::ALL).unwrap();
        let rb = compute(&b, &Metric::ALL).unwrap();
        let again = compute(&a, &Metric::ALL).unwrap();

        assert_eq!(ra, rb);
        assert_eq!(ra, again);
        assert_eq!(
            ra.skewness.clone().unwrap().unwrap().to_bits(),
            rb.skewness.clone().unwrap().unwrap().to_bits()
        );
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            compute(&Dataset::default(), &Metric::ALL),
            Err(StatsError::InvalidDataset(_))
        ));
        assert!(matches!(
            compute_named(&ds(&[(1.0, 1)]), ["bogus"]),
            Err(StatsError::InvalidMetric(name)) if name == "bogus"
        ));
        assert_eq!(
            parse_selection(Vec::<&str>::new()),
            Err(StatsError::NoMetricsRequested)
        );
    }

    #[test]
    fn all_keyword_selects_population_metrics() {
        let record = compute_named(&ds(&[(1.0, 2), (3.0, 1)]), ["all"]).unwrap();
        assert_eq!(record.metrics().collect::<Vec<_>>(), Metric::ALL.to_vec());
        assert!(record.sample_skewness.is_none());
    }

    #[test]
    fn undefined_skewness_does_not_fail_other_metrics() {
        let record = compute_named(&ds(&[(6.0, 4)]), ["all"]).unwrap();

        assert_eq!(record.mean, Some(6.0));
        assert_eq!(record.median, Some(6.0));
        assert_eq!(record.mode, Some(Mode::NoMode));
        assert!(record.skewness.unwrap().unwrap_err().is_undefined());
    }
}

// ============================================================================
// Input
// ============================================================================

mod input {
    use super::*;

    #[test]
    fn ungrouped_text_to_results() {
        let data = parse(DataKind::Ungrouped, "2, 2, 4, 2").unwrap();
        let record = compute(&data, &[Metric::Mean, Metric::Median]).unwrap();

        assert_eq!(record.mean, Some(2.5));
        assert_eq!(record.median, Some(2.0));
    }

    #[test]
    fn grouped_csv_to_results() {
        let csv = "value,frequency\n1,1\n2,1\n";
        let data = parse_table(csv).unwrap();
        assert_eq!(median(&data).unwrap(), 1.5);
    }

    #[test]
    fn non_numeric_filtered_before_engine() {
        let data = parse_observations("x, 1, y, 1, 3").unwrap();
        assert_eq!(data, ds(&[(1.0, 2), (3.0, 1)]));
    }

    #[test]
    fn nothing_numeric() {
        assert_eq!(
            parse(DataKind::Ungrouped, "a,b"),
            Err(ParseError::NoNumericData)
        );
        assert_eq!(parse(DataKind::Grouped, ""), Err(ParseError::Empty));
    }
}

// ============================================================================
// Report and chart
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn report_distinguishes_no_mode() {
        let tied = compute(&ds(&[(1.0, 2), (2.0, 2), (3.0, 1)]), &[Metric::Mode]).unwrap();
        let flat = compute(&ds(&[(1.0, 1), (2.0, 1), (3.0, 1)]), &[Metric::Mode]).unwrap();

        assert_eq!(Report::from(&tied).to_string(), "Mode: 1, 2");
        assert_eq!(Report::from(&flat).to_string(), "Mode: No mode");
    }

    #[test]
    fn report_lists_all_labels() {
        let record = compute(&ds(&[(2.0, 3), (4.0, 1)]), &Metric::ALL).unwrap();
        let text = Report::from(&record).to_string();

        assert!(text.starts_with("Mean: 2.5\nMedian: 2\nMode: 2\nVariance: 0.75\n"));
        assert!(text.contains("Standard Deviation: "));
        assert!(text.contains("Skewness: "));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn chart_independent_of_results() {
        let data = ds(&[(3.0, 1), (1.0, 4)]);
        let chart = ChartSpec::from_dataset(&data, ChartKind::Histogram).unwrap();

        assert_eq!(chart.labels(), &[1.0, 3.0]);
        assert_eq!(chart.magnitudes(), &[4, 1]);
        assert_eq!(chart.render_type(), "bar");
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    #[test]
    fn dataset_roundtrip() {
        let data = ds(&[(2.0, 3), (4.0, 1)]);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"[{"value":2.0,"frequency":3},{"value":4.0,"frequency":1}]"#
        );

        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn invalid_dataset_rejected_on_deserialize() {
        let zero = r#"[{"value":1.0,"frequency":0}]"#;
        assert!(serde_json::from_str::<Dataset>(zero).is_err());

        let duplicate = r#"[{"value":1.0,"frequency":1},{"value":1.0,"frequency":2}]"#;
        assert!(serde_json::from_str::<Dataset>(duplicate).is_err());
    }

    #[test]
    fn record_serializes_present_fields_only() {
        let record = compute(&ds(&[(5.0, 2)]), &[Metric::Mean, Metric::Mode, Metric::Skewness])
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "mean": 5.0,
                "mode": "no_mode",
                "skewness": null
            })
        );
    }

    #[test]
    fn mode_values_serialize() {
        let record = compute(&ds(&[(1.0, 2), (2.0, 2), (3.0, 1)]), &[Metric::Mode]).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "mode": { "values": [1.0, 2.0] } }));
    }

    #[test]
    fn metric_names() {
        assert_eq!(serde_json::to_string(&Metric::StdDev).unwrap(), r#""stdDev""#);
        let m: Metric = serde_json::from_str(r#""sampleSkewness""#).unwrap();
        assert_eq!(m, Metric::SampleSkewness);
    }
}
