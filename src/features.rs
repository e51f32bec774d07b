use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Largest accepted magnitude of the a* and b* axes.
pub const LAB_AB_LIMIT: f64 = 128.0;

/// A color in CIE L*a*b*. Travels over the wire as `[L, a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        [lab.l, lab.a, lab.b]
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GarmentType {
    Top,
    Bottom,
    Outer,
    Dress,
    Accessory,
    Shoes,
    Hat,
    Bag,
}

impl GarmentType {
    /// Pieces that can echo the accent color: outerwear and accessories.
    pub fn is_secondary(self) -> bool {
        matches!(
            self,
            Self::Outer | Self::Accessory | Self::Shoes | Self::Hat | Self::Bag
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Material {
    Denim,
    Cotton,
    Wool,
    Knit,
    Leather,
    Satin,
    Silk,
    Synthetic,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PatternType {
    None,
    Solid,
    Stripe,
    Plaid,
    Graphic,
    Floral,
    Dots,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentFeatures {
    pub id: String,
    #[serde(rename = "type")]
    pub garment_type: GarmentType,
    pub area_pct: f64,
    #[serde(rename = "colorLAB")]
    pub color_lab: Lab,
    pub material: Material,
    pub pattern_type: PatternType,
    pub pattern_strength: f64,
    pub gloss_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCluster {
    pub lab: Lab,
    pub pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThirdsArea {
    pub top: f64,
    pub mid: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainZ {
    pub skin: f64,
    pub hue: f64,
    pub texture: f64,
    pub pattern: f64,
}

impl DomainZ {
    pub fn as_array(&self) -> [f64; 4] {
        [self.skin, self.hue, self.texture, self.pattern]
    }
}

/// Optional body measurements in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyMeasurements {
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub neck: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitFeatures {
    pub outfit_id: String,
    pub garments: Vec<GarmentFeatures>,
    pub color_clusters: Vec<ColorCluster>,
    pub thirds_area: ThirdsArea,
    #[serde(rename = "domainZ")]
    pub domain_z: DomainZ,
    #[serde(default)]
    pub body: Option<BodyMeasurements>,
    pub extraction_version: String,
}

impl OutfitFeatures {
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Clusters ordered by descending share. Ties keep their input order.
    pub fn sorted_clusters(&self) -> Vec<ColorCluster> {
        let mut clusters = self.color_clusters.clone();
        clusters.sort_by(|a, b| b.pct.total_cmp(&a.pct));
        clusters
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.outfit_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("outfitId".into()));
        }
        if self.garments.is_empty() {
            return Err(ValidationError::NoGarments);
        }

        for (i, g) in self.garments.iter().enumerate() {
            let path = format!("garments[{}]", i);
            if g.id.trim().is_empty() {
                return Err(ValidationError::EmptyField(format!("{}.id", path)));
            }
            check_lab(&g.color_lab, &format!("{}.colorLAB", path))?;
            check_unit(g.area_pct, &format!("{}.areaPct", path))?;
            check_unit(g.pattern_strength, &format!("{}.patternStrength", path))?;
            check_unit(g.gloss_index, &format!("{}.glossIndex", path))?;
        }

        for (i, c) in self.color_clusters.iter().enumerate() {
            let path = format!("colorClusters[{}]", i);
            check_lab(&c.lab, &format!("{}.lab", path))?;
            check_unit(c.pct, &format!("{}.pct", path))?;
        }

        check_unit(self.thirds_area.top, "thirdsArea.top")?;
        check_unit(self.thirds_area.mid, "thirdsArea.mid")?;
        check_unit(self.thirds_area.bottom, "thirdsArea.bottom")?;

        let z = &self.domain_z;
        for (name, value) in [
            ("skin", z.skin),
            ("hue", z.hue),
            ("texture", z.texture),
            ("pattern", z.pattern),
        ] {
            check_finite(value, &format!("domainZ.{}", name))?;
        }

        if let Some(body) = &self.body {
            for (name, value) in [("waist", body.waist), ("neck", body.neck)] {
                if let Some(v) = value {
                    let field = format!("body.{}", name);
                    check_finite(v, &field)?;
                    if v < 0.0 {
                        return Err(ValidationError::OutOfRange {
                            field,
                            value: v,
                            min: 0.0,
                            max: f64::INFINITY,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_finite(value: f64, field: &str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            field: field.to_string(),
        })
    }
}

fn check_unit(value: f64, field: &str) -> Result<(), ValidationError> {
    check_finite(value, field)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

fn check_lab(lab: &Lab, field: &str) -> Result<(), ValidationError> {
    if !lab.is_finite() {
        return Err(ValidationError::NonFinite {
            field: field.to_string(),
        });
    }

    for (axis, value, min, max) in [
        ("L", lab.l, 0.0, 100.0),
        ("a", lab.a, -LAB_AB_LIMIT, LAB_AB_LIMIT),
        ("b", lab.b, -LAB_AB_LIMIT, LAB_AB_LIMIT),
    ] {
        if !(min..=max).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: format!("{}.{}", field, axis),
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}
