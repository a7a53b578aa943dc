//! Multi-class rule mining example on an Iris-like dataset.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rulemine_rs::{FeatureMask, MineOptions, MinerConfig, RuleMiner, Sample};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = MinerConfig::builder()
        .classes(3)
        .conditions(1)
        .min_evidence(3)
        .build()
        .expect("valid config");

    let train = generate_data(90, 42);
    let test = generate_data(30, 7);

    let mask = FeatureMask::from_samples(&train).expect("non-empty training set");
    println!("Dropping constant features {:?}", mask.removed());
    let train = mask.apply_samples(&train);
    let test = mask.apply_samples(&test);

    println!("Mining on Iris-like dataset...");
    println!("  {} samples, {} features, 3 classes", train.len(), mask.kept().len());

    let options = MineOptions::new().report_every(10).with_callback(|p| {
        eprint!("\r  {} candidates -> {:?}", p.candidates, p.distribution);
        true
    });
    let ensemble = RuleMiner::new(config)
        .mine_with(&train, options)
        .expect("perfect rules exist");
    eprintln!();

    println!("\nFound {} rules:", ensemble.len());
    for rule in ensemble.rules().iter().take(10) {
        println!("  {rule}");
    }

    println!("\nTraining accuracy: {:.1}%", ensemble.evaluate(&train) * 100.0);
    println!("Test accuracy: {:.1}%", ensemble.evaluate(&test) * 100.0);

    println!("\nSample predictions:");
    for s in test.iter().take(5) {
        match ensemble.predict(&s.features) {
            Some(label) => println!("  {:?} -> Class {} (expected: {})", s.features, label, s.label),
            None => println!("  {:?} -> abstain (expected: {})", s.features, s.label)
        }
    }
}

fn generate_data(n_samples: usize, seed: u64) -> Vec<Sample> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let centers = [[5.0, 3.4, 1.5, 0.2], [5.9, 2.8, 4.3, 1.3], [6.6, 3.0, 5.6, 2.0]];

    (0..n_samples)
        .map(|i| {
            let label = i % 3;
            let mut features: Vec<f32> = centers[label]
                .iter()
                .map(|c| c + (rng.random::<f32>() - 0.5) * 0.6)
                .map(|v| (v * 10.0).round() / 10.0)
                .collect();
            features.push(1.0);
            Sample::new(features, label)
        })
        .collect()
}
