use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crosslist::{
    build_signature, dedupe_ranked, overfetch_count, FilterConfig, Processor, Ram, Specs, Storage,
};

fn specs(brand: &str, series: &str, ram: &str, storage: &str, gpu: &str) -> Specs {
    Specs {
        brand: brand.into(),
        series: series.into(),
        processor: Processor {
            name: "i5".into(),
            gen: "11".into(),
            variant: String::new(),
        },
        ram: Ram { size: ram.into() },
        storage: Storage {
            size: storage.into(),
            kind: "ssd".into(),
        },
        gpu: gpu.into(),
        ..Specs::default()
    }
}

#[test]
fn documented_threshold_example_rejects_the_near_twin() {
    let accepted = specs("hp", "pavilion 15", "8", "512gb", "");
    let near_twin = specs("hp", "pavilion 15s", "8", "512gb", "");
    assert_eq!(build_signature(&accepted), "hp|pavilion15|i5|8gb|512gb||");
    assert_eq!(build_signature(&near_twin), "hp|pavilion15s|i5|8gb|512gb||");

    let kept = dedupe_ranked(vec![accepted, near_twin], 10, &FilterConfig::default());
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].series, "pavilion 15");
}

#[test]
fn output_never_exceeds_the_requested_count() {
    let config = FilterConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let brands = ["hp", "lenovo", "dell", "asus", "acer"];
    let lines = ["alpha", "bravo", "circa", "delta", "extra", "futura"];

    for _ in 0..20 {
        let len = rng.gen_range(0..40);
        let candidates: Vec<Specs> = (0..len)
            .map(|idx| {
                specs(
                    brands[rng.gen_range(0..brands.len())],
                    &format!("{} {idx}", lines[rng.gen_range(0..lines.len())]),
                    &format!("{}", 4 << rng.gen_range(0..3)),
                    &format!("{}gb", 128 << rng.gen_range(0..3)),
                    "",
                )
            })
            .collect();
        let requested = rng.gen_range(0..10);
        let kept = dedupe_ranked(candidates, requested, &config);
        assert!(kept.len() <= requested);
    }
}

#[test]
fn survivors_keep_their_relative_rank_order() {
    let config = FilterConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let brands = ["hp", "lenovo", "dell", "asus", "acer", "msi"];
    let lines = ["omega", "pulse", "quartz", "raven", "sigma"];

    let mut candidates: Vec<Specs> = (0..30)
        .map(|idx| {
            specs(
                brands[idx % brands.len()],
                &format!("{} {idx}", lines[idx % lines.len()]),
                "8",
                &format!("{}gb", 128 << (idx % 4)),
                "",
            )
        })
        .collect();
    candidates.shuffle(&mut rng);

    let ranks: Vec<String> = candidates.iter().map(|c| c.series.clone()).collect();
    let kept = dedupe_ranked(candidates, 12, &config);

    let kept_ranks: Vec<usize> = kept
        .iter()
        .map(|c| ranks.iter().position(|r| r == &c.series).unwrap())
        .collect();
    let mut sorted = kept_ranks.clone();
    sorted.sort_unstable();
    assert_eq!(kept_ranks, sorted);
}

#[test]
fn invocations_are_independent() {
    let config = FilterConfig::default();
    let batch = vec![
        specs("hp", "pavilion 15", "8", "512gb", ""),
        specs("hp", "pavilion 15s", "8", "512gb", ""),
        specs("lenovo", "legion 5", "16", "1tb", "rtx"),
    ];
    let first = dedupe_ranked(batch.clone(), 10, &config);
    let second = dedupe_ranked(batch, 10, &config);
    assert_eq!(first.len(), second.len());
    assert_eq!(first.len(), 2);
}

#[test]
fn overfetch_sizes_the_store_query() {
    let config = FilterConfig::default();
    assert_eq!(overfetch_count(8, &config), 24);
    let wider = FilterConfig {
        overfetch_multiplier: 5,
        ..FilterConfig::default()
    };
    assert_eq!(overfetch_count(8, &wider), 40);
}
