use std::env;
use std::fs;
use std::path::Path;

/// Written when `fixtures/metrics.csv` is missing so the crate still builds.
const DEFAULT_METRICS_CSV: &str = "metric,period,value\n\
water_usage,Jan,2500\nwater_usage,Feb,2700\nwater_usage,Mar,3000\n\
fertilizer,Jan,150\nfertilizer,Feb,180\nfertilizer,Mar,200\n\
yields,Jan,1200\nyields,Feb,1400\nyields,Mar,1600\n";

const DEFAULT_SNAPSHOT_JSON: &str = r#"{"weather":{"temperature_f":72,"condition":"Sunny","humidity_pct":45,"forecast":"Clear skies expected for the next 3 days. Consider irrigation."},"sustainability_score":85}"#;

fn copy_or_default(src: &Path, dest: &Path, fallback: &str) {
    if src.exists() {
        fs::copy(src, dest).unwrap();
    } else {
        fs::write(dest, fallback).unwrap();
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    copy_or_default(
        Path::new("../fixtures/metrics.csv"),
        &out_dir.join("metrics.csv"),
        DEFAULT_METRICS_CSV,
    );
    copy_or_default(
        Path::new("../fixtures/snapshot.json"),
        &out_dir.join("snapshot.json"),
        DEFAULT_SNAPSHOT_JSON,
    );

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/metrics.csv");
    println!("cargo:rerun-if-changed=../fixtures/snapshot.json");
}
