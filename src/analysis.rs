use serde::Serialize;
use std::collections::HashMap;

/// A lab panel: measurement name mapped to its numeric value.
pub type LabPanel = HashMap<String, f64>;

/// Coarse severity classification for a panel evaluation.
///
/// Variant order matters: `Ord` is used to raise the level monotonically
/// during evaluation (a later rule can never downgrade it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Moderate,
    High,
}

/// Result of evaluating a lab panel against the rule set.
#[derive(Debug, Clone, Serialize)]
pub struct LabAnalysis {
    pub summary: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    pub health_score: u32,
}

/// Placeholder score until a real scoring model is wired in.
const HEALTH_SCORE: u32 = 75;

/// One threshold band for a measurement. Matches when the value is strictly
/// above `above` and strictly below `below` (unset bounds always match).
struct Band {
    above: Option<f64>,
    below: Option<f64>,
    finding: &'static str,
    recommendation: &'static str,
    risk: Option<RiskLevel>,
}

impl Band {
    fn matches(&self, value: f64) -> bool {
        self.above.is_none_or(|t| value > t) && self.below.is_none_or(|t| value < t)
    }
}

/// Threshold rules for a single measurement. Bands are checked in order and
/// the first match wins, so the most severe band must come first.
struct LabRule {
    measurement: &'static str,
    bands: Vec<Band>,
}

/// The fixed rule table. Built once at startup and shared by reference;
/// there is no runtime mutation path.
pub struct RuleSet {
    rules: Vec<LabRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                LabRule {
                    measurement: "glucose",
                    bands: vec![
                        Band {
                            above: Some(126.0),
                            below: None,
                            finding: "High blood glucose (possible diabetes)",
                            recommendation: "Consult endocrinologist",
                            risk: Some(RiskLevel::High),
                        },
                        Band {
                            above: Some(100.0),
                            below: None,
                            finding: "Borderline high glucose",
                            recommendation: "Monitor diet and exercise",
                            risk: Some(RiskLevel::Moderate),
                        },
                    ],
                },
                LabRule {
                    measurement: "cholesterol",
                    bands: vec![Band {
                        above: Some(200.0),
                        below: None,
                        finding: "High cholesterol",
                        recommendation: "Heart-healthy diet recommended",
                        risk: Some(RiskLevel::Moderate),
                    }],
                },
                LabRule {
                    measurement: "hdl",
                    bands: vec![Band {
                        above: None,
                        below: Some(40.0),
                        finding: "Low HDL (good cholesterol)",
                        recommendation: "Increase aerobic exercise",
                        risk: None,
                    }],
                },
            ],
        }
    }
}

impl RuleSet {
    /// Evaluate a panel against every rule. Pure function: measurements not
    /// in the table are ignored, all applicable rules fire, and the risk
    /// level only ever moves upward.
    pub fn evaluate(&self, panel: &LabPanel) -> LabAnalysis {
        let mut findings = Vec::new();
        let mut recommendations = Vec::new();
        let mut risk_level = RiskLevel::Normal;

        for rule in &self.rules {
            let Some(&value) = panel.get(rule.measurement) else {
                continue;
            };
            if let Some(band) = rule.bands.iter().find(|b| b.matches(value)) {
                findings.push(band.finding.to_string());
                recommendations.push(band.recommendation.to_string());
                if let Some(risk) = band.risk {
                    risk_level = risk_level.max(risk);
                }
            }
        }

        if findings.is_empty() {
            findings.push("All values appear normal".to_string());
            recommendations.push("Continue healthy lifestyle".to_string());
        }

        LabAnalysis {
            summary: "Lab Results Analysis".to_string(),
            findings,
            recommendations,
            risk_level,
            health_score: HEALTH_SCORE,
        }
    }
}

/// Build a panel from caller-supplied JSON. A non-numeric value for any key
/// is a validation error naming the key, not a silent skip.
pub fn panel_from_json(map: &serde_json::Map<String, serde_json::Value>) -> Result<LabPanel, String> {
    let mut panel = LabPanel::with_capacity(map.len());
    for (name, value) in map {
        match value.as_f64() {
            Some(v) => {
                panel.insert(name.clone(), v);
            }
            None => {
                // Report the value's type, not the value: payloads are
                // caller-controlled and unbounded
                return Err(format!(
                    "measurement '{}' must be a number, got {}",
                    name,
                    json_type(value)
                ));
            }
        }
    }
    Ok(panel)
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
