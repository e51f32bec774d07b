use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stylescore::api::ScoringService;
use stylescore::features::{
    ColorCluster, DomainZ, GarmentFeatures, GarmentType, Lab, Material, OutfitFeatures,
    PatternType, ThirdsArea,
};
use stylescore::{ciede2000, ScoreConfig, Scorer};

const GARMENT_TYPES: [GarmentType; 5] = [
    GarmentType::Top,
    GarmentType::Bottom,
    GarmentType::Outer,
    GarmentType::Accessory,
    GarmentType::Shoes,
];
const MATERIALS: [Material; 4] = [
    Material::Cotton,
    Material::Denim,
    Material::Leather,
    Material::Wool,
];

fn random_lab(rng: &mut fastrand::Rng) -> Lab {
    Lab::new(
        rng.f64() * 100.0,
        rng.f64() * 160.0 - 80.0,
        rng.f64() * 160.0 - 80.0,
    )
}

fn synthetic_outfit(rng: &mut fastrand::Rng, id: usize) -> OutfitFeatures {
    let garments = (0..rng.usize(2..6))
        .map(|i| GarmentFeatures {
            id: format!("g{}", i),
            garment_type: GARMENT_TYPES[i % GARMENT_TYPES.len()],
            area_pct: rng.f64() * 0.5,
            color_lab: random_lab(rng),
            material: MATERIALS[rng.usize(..MATERIALS.len())],
            pattern_type: if rng.bool() {
                PatternType::Stripe
            } else {
                PatternType::None
            },
            pattern_strength: rng.f64(),
            gloss_index: rng.f64(),
        })
        .collect();

    let color_clusters = (0..3)
        .map(|_| ColorCluster {
            lab: random_lab(rng),
            pct: rng.f64(),
        })
        .collect();

    OutfitFeatures {
        outfit_id: format!("bench-{}", id),
        garments,
        color_clusters,
        thirds_area: ThirdsArea {
            top: rng.f64(),
            mid: rng.f64(),
            bottom: rng.f64(),
        },
        domain_z: DomainZ {
            skin: rng.f64() * 4.0 - 2.0,
            hue: rng.f64() * 4.0 - 2.0,
            texture: rng.f64() * 4.0 - 2.0,
            pattern: rng.f64() * 4.0 - 2.0,
        },
        body: None,
        extraction_version: "bench".to_string(),
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let outfits: Vec<OutfitFeatures> = (0..1000).map(|i| synthetic_outfit(&mut rng, i)).collect();

    let a = random_lab(&mut rng);
    let b = random_lab(&mut rng);
    c.bench_function("ciede2000", |bench| {
        bench.iter(|| ciede2000(black_box(a), black_box(b)))
    });

    let scorer = Scorer::new(ScoreConfig::default());
    c.bench_function("score (single outfit)", |bench| {
        bench.iter(|| scorer.score(black_box(&outfits[0])))
    });

    let service = ScoringService::new(ScoreConfig::default());
    c.bench_function("score_batch (1k outfits)", |bench| {
        bench.iter(|| service.score_batch(black_box(&outfits)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
