#![allow(dead_code)]

use stylescore::features::{
    BodyMeasurements, ColorCluster, DomainZ, GarmentFeatures, GarmentType, Lab, Material,
    OutfitFeatures, PatternType, ThirdsArea,
};

/// Builder for GarmentFeatures to keep test fixtures short.
pub struct GarmentBuilder {
    garment: GarmentFeatures,
}

impl GarmentBuilder {
    pub fn new(id: &str, garment_type: GarmentType) -> Self {
        Self {
            garment: GarmentFeatures {
                id: id.to_string(),
                garment_type,
                area_pct: 0.3,
                color_lab: Lab::new(50.0, 0.0, 0.0),
                material: Material::Cotton,
                pattern_type: PatternType::None,
                pattern_strength: 0.0,
                gloss_index: 0.1,
            },
        }
    }

    pub fn lab(mut self, l: f64, a: f64, b: f64) -> Self {
        self.garment.color_lab = Lab::new(l, a, b);
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.garment.area_pct = area;
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.garment.material = material;
        self
    }

    pub fn pattern(mut self, pattern: PatternType, strength: f64) -> Self {
        self.garment.pattern_type = pattern;
        self.garment.pattern_strength = strength;
        self
    }

    pub fn gloss(mut self, gloss: f64) -> Self {
        self.garment.gloss_index = gloss;
        self
    }

    pub fn build(self) -> GarmentFeatures {
        self.garment
    }
}

pub fn cluster(l: f64, a: f64, b: f64, pct: f64) -> ColorCluster {
    ColorCluster {
        lab: Lab::new(l, a, b),
        pct,
    }
}

pub fn thirds(top: f64, mid: f64, bottom: f64) -> ThirdsArea {
    ThirdsArea { top, mid, bottom }
}

pub fn domain_z(skin: f64, hue: f64, texture: f64, pattern: f64) -> DomainZ {
    DomainZ {
        skin,
        hue,
        texture,
        pattern,
    }
}

pub fn body(waist: f64, neck: f64) -> BodyMeasurements {
    BodyMeasurements {
        waist: Some(waist),
        neck: Some(neck),
    }
}

/// Clusters with hues spaced inside the default harmonious band.
pub fn pyramid_clusters(shares: [f64; 3]) -> Vec<ColorCluster> {
    vec![
        cluster(60.0, -5.0, -7.0, shares[0]),
        cluster(48.0, 2.0, 4.0, shares[1]),
        cluster(70.0, -6.0, -10.0, shares[2]),
    ]
}

/// The plaid-top / denim / leather-accessory reference outfit.
pub fn reference_outfit() -> OutfitFeatures {
    OutfitFeatures {
        outfit_id: "abc123".to_string(),
        garments: vec![
            GarmentBuilder::new("top1", GarmentType::Top)
                .area(0.31)
                .lab(62.0, -4.0, -8.0)
                .material(Material::Cotton)
                .pattern(PatternType::Plaid, 0.72)
                .gloss(0.1)
                .build(),
            GarmentBuilder::new("pant1", GarmentType::Bottom)
                .area(0.41)
                .lab(50.0, 0.0, 0.0)
                .material(Material::Denim)
                .gloss(0.05)
                .build(),
            GarmentBuilder::new("shoe1", GarmentType::Accessory)
                .area(0.06)
                .lab(60.0, -5.0, -7.0)
                .material(Material::Leather)
                .gloss(0.8)
                .build(),
        ],
        color_clusters: vec![
            cluster(60.0, -5.0, -7.0, 0.52),
            cluster(48.0, 2.0, 4.0, 0.30),
            cluster(70.0, -6.0, -10.0, 0.18),
        ],
        thirds_area: thirds(0.35, 0.30, 0.35),
        domain_z: domain_z(0.2, 1.4, 0.5, 0.1),
        body: None,
        extraction_version: "segm-1.2.0-kmeans-3".to_string(),
    }
}

/// A single-garment, single-cluster outfit.
pub fn minimal_outfit() -> OutfitFeatures {
    OutfitFeatures {
        outfit_id: "test".to_string(),
        garments: vec![GarmentBuilder::new("g1", GarmentType::Top)
            .lab(60.0, -5.0, -7.0)
            .build()],
        color_clusters: vec![cluster(60.0, -5.0, -7.0, 1.0)],
        thirds_area: thirds(0.33, 0.34, 0.33),
        domain_z: domain_z(0.2, 0.5, 0.3, 0.1),
        body: None,
        extraction_version: "test-1.0".to_string(),
    }
}
