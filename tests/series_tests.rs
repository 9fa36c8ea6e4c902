// tests/series_tests.rs
use std::fs;
use std::sync::Arc;

use aqua_calc::bands::{Band, BandSample};
use aqua_calc::batch::BatchConfig;
use aqua_calc::catalog::IndexId;
use aqua_calc::io::{read_series, write_json};
use aqua_calc::series::{median_composite, DatedSample, SampleSeries};
use aqua_calc::stats::{index_stats, median, round2, stats_report};
use aqua_calc::utils::cache::SeriesCache;
use aqua_calc::utils::scaling::{dn_to_reflectance, DEFAULT_DN_SCALE};

fn sample(values: &[(Band, f64)]) -> BandSample {
    values.iter().copied().collect()
}

fn dated(date: &str, values: &[(Band, f64)]) -> DatedSample {
    DatedSample {
        date: date.to_string(),
        bands: sample(values),
    }
}

#[test]
fn test_median() {
    assert_eq!(median(&[]), None);
    assert_eq!(median(&[3.0]), Some(3.0));
    assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
}

#[test]
fn test_round2() {
    assert_eq!(round2(51.519), 51.52);
    assert_eq!(round2(-0.246), -0.25);
    assert_eq!(round2(0.111111), 0.11);
}

#[test]
fn test_median_composite() {
    let a = sample(&[(Band::Green, 0.06), (Band::Red, 0.10)]);
    let b = sample(&[(Band::Green, 0.08), (Band::Red, 0.12)]);
    let c = sample(&[(Band::Green, 0.10)]);

    let composite = median_composite(&[&a, &b, &c]);

    assert_eq!(composite.get(Band::Green), Some(0.08));
    // Red present in two of three samples, median of the pair
    assert!((composite.get(Band::Red).unwrap() - 0.11).abs() < 1e-12);
    assert_eq!(composite.get(Band::Nir), None);
}

#[test]
fn test_composite_skips_qa60() {
    let a = sample(&[(Band::Green, 0.06), (Band::Qa60, 0.0)]);
    let composite = median_composite(&[&a]);
    assert_eq!(composite.get(Band::Qa60), None);
    assert_eq!(composite.get(Band::Green), Some(0.06));
}

#[test]
fn test_cloud_flags() {
    let clear = sample(&[(Band::Green, 0.08), (Band::Qa60, 0.0)]);
    assert!(!clear.is_cloudy());

    let opaque = sample(&[(Band::Green, 0.08), (Band::Qa60, 1024.0)]);
    assert!(opaque.is_cloudy());

    let cirrus = sample(&[(Band::Green, 0.08), (Band::Qa60, 2048.0)]);
    assert!(cirrus.is_cloudy());

    let unmasked = sample(&[(Band::Green, 0.08)]);
    assert!(!unmasked.is_cloudy());
}

#[test]
fn test_series_evaluation() {
    let series = SampleSeries::new(vec![
        // Two clear acquisitions on the same date collapse to their median
        dated("2025-03-19", &[(Band::Green, 0.06), (Band::Red, 0.10)]),
        dated("2025-03-19", &[(Band::Green, 0.10), (Band::Red, 0.10)]),
        dated("2025-03-17", &[(Band::Green, 0.08), (Band::Red, 0.10)]),
        // Cloudy acquisition with junk values must not contaminate anything
        dated(
            "2025-03-17",
            &[(Band::Green, 9.0), (Band::Red, 9.0), (Band::Qa60, 1024.0)],
        ),
        // A date that is all cloud drops out entirely
        dated("2025-03-22", &[(Band::Green, 9.0), (Band::Qa60, 2048.0)]),
    ]);

    let results = series.evaluate(Some(&[IndexId::Turbidity]));

    let dates: Vec<&str> = results.dates().collect();
    assert_eq!(dates, vec!["2025-03-17", "2025-03-19"]);

    // 2025-03-17: (0.10 - 0.08) / (0.10 + 0.08)
    let t17 = results
        .get("2025-03-17")
        .unwrap()
        .get(IndexId::Turbidity)
        .unwrap()
        .as_f64()
        .unwrap();
    assert!((t17 - 0.11111).abs() < 0.0001);

    // 2025-03-19: composite green = 0.08, same turbidity
    let t19 = results
        .get("2025-03-19")
        .unwrap()
        .get(IndexId::Turbidity)
        .unwrap()
        .as_f64()
        .unwrap();
    assert!((t19 - 0.11111).abs() < 0.0001);
}

#[test]
fn test_stats_report() {
    let series = SampleSeries::new(vec![
        dated("2025-03-17", &[(Band::Green, 0.08), (Band::Red, 0.10)]),
        // Red = 0 makes CDOM undefined on this date; the date must be
        // dropped from the CDOM series, not zero-filled
        dated("2025-03-19", &[(Band::Green, 0.08), (Band::Red, 0.0)]),
    ]);

    let results = series.evaluate(Some(&[IndexId::Cdom, IndexId::Turbidity]));

    let cdom = index_stats(&results, IndexId::Cdom);
    assert_eq!(cdom.dates, vec!["2025-03-17"]);
    assert_eq!(cdom.medians, vec![51.52]);

    let turbidity = index_stats(&results, IndexId::Turbidity);
    assert_eq!(turbidity.dates.len(), 2);

    let report = stats_report(&results);
    assert_eq!(report.len(), 2);
    assert_eq!(report.get(IndexId::Cdom).unwrap().medians, vec![51.52]);
    // Indices that were never computed stay out of the report
    assert!(report.get(IndexId::Ndwi).is_none());
}

#[test]
fn test_dn_scaling() {
    let raw = sample(&[(Band::Green, 800.0), (Band::Red, 1000.0), (Band::Qa60, 1024.0)]);
    let scaled = dn_to_reflectance(&raw, DEFAULT_DN_SCALE);

    assert_eq!(scaled.get(Band::Green), Some(0.08));
    assert_eq!(scaled.get(Band::Red), Some(0.10));
    // Bitmask band must keep its bits
    assert_eq!(scaled.get(Band::Qa60), Some(1024.0));
    assert!(scaled.is_cloudy());
}

#[test]
fn test_reader_accepts_both_layouts() {
    let dir = std::env::temp_dir();

    let wrapped = dir.join("aqua_calc_wrapped.json");
    fs::write(
        &wrapped,
        r#"{"samples": [{"date": "2025-03-17", "bands": {"Green": 0.08, "Red": 0.1}}]}"#,
    )
    .unwrap();
    let series = read_series(&wrapped).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.samples[0].bands.get(Band::Green), Some(0.08));

    // Sentinel-2 band codes are accepted as aliases
    let bare = dir.join("aqua_calc_bare.json");
    fs::write(
        &bare,
        r#"[{"date": "2025-03-17", "bands": {"B3": 0.08, "B4": 0.1, "QA60": 0}}]"#,
    )
    .unwrap();
    let series = read_series(&bare).unwrap();
    assert_eq!(series.samples[0].bands.get(Band::Red), Some(0.1));
    assert_eq!(series.samples[0].bands.get(Band::Qa60), Some(0.0));

    fs::remove_file(&wrapped).ok();
    fs::remove_file(&bare).ok();
}

#[test]
fn test_write_and_reread_results() {
    let dir = std::env::temp_dir();
    let input = dir.join("aqua_calc_series.json");
    let output = dir.join("aqua_calc_results.json");

    let series = SampleSeries::new(vec![dated(
        "2025-03-17",
        &[(Band::Green, 0.08), (Band::Red, 0.10)],
    )]);
    write_json(&series, &input, true).unwrap();

    let loaded = read_series(&input).unwrap();
    let results = loaded.evaluate(Some(&[IndexId::Cdom]));
    write_json(&results, &output, false).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let cdom = json["2025-03-17"]["CDOM"].as_f64().unwrap();
    assert!((cdom - 51.52).abs() < 0.05);

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn test_series_cache() {
    let dir = std::env::temp_dir();
    let path = dir.join("aqua_calc_cached.json");
    fs::write(
        &path,
        r#"[{"date": "2025-03-17", "bands": {"Green": 0.08, "Red": 0.1}}]"#,
    )
    .unwrap();

    let cache = SeriesCache::new();
    assert!(cache.is_empty());

    let first = cache.get_series(&path).unwrap();
    let second = cache.get_series(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());

    fs::remove_file(&path).ok();
}

#[test]
fn test_batch_config_parsing() {
    let config: BatchConfig = serde_json::from_str(
        r#"{
            "global": {"dn_scale": 10000, "indexes": ["CDOM", "DOC"]},
            "jobs": [
                {"input": "series.json", "output": "results.json"},
                {"input": "series.json", "output": "stats.json", "stats": true, "indexes": ["Turbidity"]}
            ]
        }"#,
    )
    .unwrap();

    assert!(config.global.pretty);
    assert_eq!(config.global.dn_scale, Some(10000.0));
    assert_eq!(config.jobs.len(), 2);
    assert!(!config.jobs[0].stats);
    assert!(config.jobs[1].stats);
    assert_eq!(config.jobs[1].indexes.as_deref(), Some(&["Turbidity".to_string()][..]));
}
