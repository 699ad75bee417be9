/// One row of a band table: values in `[min, max)` earn `points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub points: u32,
}

impl Band {
    const fn new(min: f64, max: f64, points: u32) -> Self {
        Self { min, max, points }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    pub bands: Vec<Band>,
    pub fallback: u32,
}

impl BandTable {
    pub fn lookup(&self, value: f64) -> u32 {
        if value.is_nan() {
            return self.fallback;
        }
        self.bands
            .iter()
            .find(|b| b.contains(value))
            .map(|b| b.points)
            .unwrap_or(self.fallback)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    pub speech_rate: BandTable,
    pub grammar_accuracy: BandTable,
    pub richness: BandTable,
    pub filler_rate: BandTable,
    pub sentiment: BandTable,
    /// Each grammar issue per word costs this many accuracy points.
    pub grammar_error_weight: f64,
    pub mtld_threshold: f64,
    pub keyword_match_threshold: f64,
    /// Sentences this short (in chars, trimmed) are ignored by the flow check.
    pub flow_min_sentence_chars: usize,
    pub flow_min_sentences: usize,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        let inf = f64::INFINITY;
        Self {
            speech_rate: BandTable {
                bands: vec![
                    Band::new(111.0, 141.0, 10),
                    Band::new(141.0, 161.0, 6),
                    Band::new(81.0, 111.0, 6),
                ],
                fallback: 2,
            },
            grammar_accuracy: descending_quality_table(10, 2),
            richness: descending_quality_table(10, 2),
            // Inclusive upper bounds: a rate of exactly 3.0 still earns 15.
            filler_rate: BandTable {
                bands: vec![
                    Band::new(-inf, 3.0f64.next_up(), 15),
                    Band::new(3.0f64.next_up(), 6.0f64.next_up(), 12),
                    Band::new(6.0f64.next_up(), 9.0f64.next_up(), 9),
                    Band::new(9.0f64.next_up(), 12.0f64.next_up(), 6),
                ],
                fallback: 3,
            },
            sentiment: BandTable {
                bands: vec![
                    Band::new(0.9, inf, 15),
                    Band::new(0.7, 0.9, 12),
                    Band::new(0.5, 0.7, 9),
                    Band::new(0.3, 0.5, 6),
                ],
                fallback: 3,
            },
            grammar_error_weight: 10.0,
            mtld_threshold: 0.72,
            keyword_match_threshold: 0.75,
            flow_min_sentence_chars: 5,
            flow_min_sentences: 3,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// `>=0.9 top`, `>=0.7`, `>=0.5`, `>=0.3`, then `bottom`; steps of two points.
fn descending_quality_table(top: u32, bottom: u32) -> BandTable {
    let inf = f64::INFINITY;
    BandTable {
        bands: vec![
            Band::new(0.9, inf, top),
            Band::new(0.7, 0.9, top - 2),
            Band::new(0.5, 0.7, top - 4),
            Band::new(0.3, 0.5, top - 6),
        ],
        fallback: bottom,
    }
}
