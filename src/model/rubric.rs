#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    ContentAndStructure,
    SpeechRate,
    LanguageAndGrammar,
    Clarity,
    Engagement,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::ContentAndStructure => "Content & Structure",
            Category::SpeechRate => "Speech Rate",
            Category::LanguageAndGrammar => "Language & Grammar",
            Category::Clarity => "Clarity",
            Category::Engagement => "Engagement",
        }
    }
}

pub fn category_order() -> &'static [Category] {
    &[
        Category::ContentAndStructure,
        Category::SpeechRate,
        Category::LanguageAndGrammar,
        Category::Clarity,
        Category::Engagement,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    Salutation,
    KeyWord,
    Flow,
    SpeechRate,
    Error,
    Richness,
    FillerWordRate,
    Sentiment,
}

impl Criterion {
    pub fn key(self) -> &'static str {
        match self {
            Criterion::Salutation => "Salutation",
            Criterion::KeyWord => "KeyWord",
            Criterion::Flow => "Flow",
            Criterion::SpeechRate => "SpeechRate",
            Criterion::Error => "Error",
            Criterion::Richness => "Richness",
            Criterion::FillerWordRate => "FillerWordRate",
            Criterion::Sentiment => "Sentiment",
        }
    }

    /// Display name shown next to the score in the UI.
    pub fn metric_name(self) -> &'static str {
        match self {
            Criterion::Salutation => "Salutation Level",
            Criterion::KeyWord => "Keyword Presence",
            Criterion::Flow => "Flow & Structure",
            Criterion::SpeechRate => "Speech Rate (words/min)",
            Criterion::Error => "Grammar Accuracy",
            Criterion::Richness => "Vocabulary Richness",
            Criterion::FillerWordRate => "Filler Word Rate",
            Criterion::Sentiment => "Sentiment & Positivity",
        }
    }

    pub fn max_score(self) -> u32 {
        match self {
            Criterion::Salutation => 5,
            Criterion::KeyWord => 30,
            Criterion::Flow => 5,
            Criterion::SpeechRate => 10,
            Criterion::Error => 10,
            Criterion::Richness => 10,
            Criterion::FillerWordRate => 15,
            Criterion::Sentiment => 15,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Criterion::Salutation | Criterion::KeyWord | Criterion::Flow => {
                Category::ContentAndStructure
            }
            Criterion::SpeechRate => Category::SpeechRate,
            Criterion::Error | Criterion::Richness => Category::LanguageAndGrammar,
            Criterion::FillerWordRate => Category::Clarity,
            Criterion::Sentiment => Category::Engagement,
        }
    }
}

pub fn criterion_order() -> &'static [Criterion] {
    &[
        Criterion::Salutation,
        Criterion::KeyWord,
        Criterion::Flow,
        Criterion::SpeechRate,
        Criterion::Error,
        Criterion::Richness,
        Criterion::FillerWordRate,
        Criterion::Sentiment,
    ]
}

pub fn total_max_score() -> u32 {
    criterion_order().iter().map(|c| c.max_score()).sum()
}
