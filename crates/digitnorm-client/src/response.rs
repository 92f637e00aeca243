use std::collections::BTreeMap;

use serde::Deserialize;

/// Number of digit classes the service scores.
pub const DIGIT_CLASSES: usize = 10;

/// Wire shape of the inference service response.
///
/// ```json
/// { "success": true, "predicted_digit": 7, "probabilities": { "0": 0.01, ... } }
/// ```
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    /// Whether the service produced a classification.
    pub success: bool,

    /// The digit with the highest confidence.
    #[serde(default)]
    pub predicted_digit: u8,

    /// Confidence per digit, keyed by the digit label.
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,

    /// Failure description when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    /// Collapse the wire shape into the ordered form the caller consumes.
    ///
    /// Labels that do not parse as a digit are dropped; digits the service
    /// did not score stay at zero. Confidences are taken as-is, not
    /// renormalized.
    pub fn into_prediction(self) -> Prediction {
        let mut confidences = [0.0; DIGIT_CLASSES];
        for (label, confidence) in self.probabilities {
            if let Ok(digit) = label.parse::<usize>() {
                if digit < DIGIT_CLASSES {
                    confidences[digit] = confidence;
                }
            }
        }

        Prediction {
            digit: self.predicted_digit,
            confidences,
        }
    }
}

/// A classification of one normalized digit image.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted digit, 0-9.
    pub digit: u8,

    /// Confidence per digit, indexed by digit value.
    pub confidences: [f64; DIGIT_CLASSES],
}
