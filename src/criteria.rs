/// Named response-time tiers in seconds, ascending in severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseTimeThresholds {
    pub excellent_secs: u32,
    pub good_secs: u32,
    pub regular_secs: u32,
    pub poor_secs: u32,
}

/// Weights for combining the two axis scores. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub empathy: f64,
    pub response_time: f64,
}

/// Immutable evaluation configuration: positive-language markers,
/// response-time thresholds, and score weights.
///
/// Constructed once and passed by reference through the pipeline; accessors
/// return copies so callers never hold the internal tables.
#[derive(Debug, Clone)]
pub struct CriteriaSet {
    positive_markers: Vec<String>,
    thresholds: ResponseTimeThresholds,
    weights: ScoreWeights,
}

impl Default for CriteriaSet {
    fn default() -> Self {
        Self::new(
            DEFAULT_POSITIVE_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            ResponseTimeThresholds {
                excellent_secs: 10,
                good_secs: 20,
                regular_secs: 30,
                poor_secs: 60,
            },
            ScoreWeights {
                empathy: 0.6,
                response_time: 0.4,
            },
        )
    }
}

impl CriteriaSet {
    pub fn new(
        positive_markers: Vec<String>,
        thresholds: ResponseTimeThresholds,
        weights: ScoreWeights,
    ) -> Self {
        debug_assert!((weights.empathy + weights.response_time - 1.0).abs() < 1e-9);
        debug_assert!(thresholds.excellent_secs <= thresholds.good_secs);
        debug_assert!(thresholds.good_secs <= thresholds.regular_secs);
        debug_assert!(thresholds.regular_secs <= thresholds.poor_secs);

        Self {
            positive_markers,
            thresholds,
            weights,
        }
    }

    /// Positive-language markers, matched case-insensitively as substrings.
    pub fn positive_markers(&self) -> Vec<String> {
        self.positive_markers.clone()
    }

    pub fn thresholds(&self) -> ResponseTimeThresholds {
        self.thresholds
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// A response slower than this counts as a slow response.
    pub fn slow_threshold_secs(&self) -> i64 {
        i64::from(self.thresholds.regular_secs)
    }

    /// Score the mean response latency on the fixed threshold ladder.
    ///
    /// Callers pass a non-negative finite mean, or 0.0 when no latency pairs
    /// exist (which lands in the excellent tier).
    pub fn score_response_time(&self, mean_secs: f64) -> f64 {
        if mean_secs <= f64::from(self.thresholds.excellent_secs) {
            10.0
        } else if mean_secs <= f64::from(self.thresholds.good_secs) {
            8.0
        } else if mean_secs <= f64::from(self.thresholds.regular_secs) {
            6.0
        } else if mean_secs <= f64::from(self.thresholds.poor_secs) {
            4.0
        } else {
            2.0
        }
    }

    /// Score empathy from the share of agent messages containing a positive
    /// marker. Zero agent messages score 0.0.
    pub fn score_empathy(&self, positive_count: usize, agent_message_count: usize) -> f64 {
        if agent_message_count == 0 {
            return 0.0;
        }

        let ratio = positive_count as f64 / agent_message_count as f64;
        if ratio >= 0.8 {
            10.0
        } else if ratio >= 0.6 {
            8.5
        } else if ratio >= 0.4 {
            7.0
        } else if ratio >= 0.2 {
            5.5
        } else if ratio >= 0.1 {
            4.0
        } else {
            2.0
        }
    }

    /// Weighted overall score, rounded to one decimal place.
    ///
    /// Rounding is ties-to-even (`f64::round_ties_even`), so e.g. 7.25
    /// rounds to 7.2 and 7.75 rounds to 7.8.
    pub fn final_score(&self, empathy_score: f64, response_time_score: f64) -> f64 {
        let weighted =
            empathy_score * self.weights.empathy + response_time_score * self.weights.response_time;
        round_to_tenth(weighted)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Default marker table for Brazilian-Portuguese support conversations.
const DEFAULT_POSITIVE_MARKERS: &[&str] = &[
    "obrigado",
    "obrigada",
    "por favor",
    "vamos resolver",
    "fico à disposição",
    "entendo",
    "compreendo",
    "claro",
    "certamente",
    "sem dúvida",
    "vou ajudar",
    "posso ajudar",
    "vamos verificar",
    "vou verificar",
    "perfeito",
    "excelente",
    "ótimo",
    "muito bem",
    "vamos lá",
    "tranquilo",
    "calma",
    "paciência",
    "vou resolver",
    "vou cuidar",
    "fique tranquilo",
    "não se preocupe",
    "vou fazer o possível",
    "vou tentar",
    "vou investigar",
    "vou analisar",
];
