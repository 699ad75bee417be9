#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SalutationTier {
    Basic,
    Mid,
    Strong,
}

impl SalutationTier {
    pub fn points(self) -> u32 {
        match self {
            SalutationTier::Basic => 2,
            SalutationTier::Mid => 4,
            SalutationTier::Strong => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalutationTier::Basic => "basic",
            SalutationTier::Mid => "mid",
            SalutationTier::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SalutationDef {
    pub tier: SalutationTier,
    pub phrases: &'static [&'static str],
}

const SALUTATION_BASIC: &[&str] = &[
    "Hi",
    "Hello",
    "Hey",
    "Hey there",
    "Hi there",
    "Hello there",
    "Hi all",
    "Hey all",
    "Hi team",
    "Hello team",
    "Hey team",
    "Greetings",
    "Hi everyone",
];

const SALUTATION_MID: &[&str] = &[
    "Good Morning",
    "Good Afternoon",
    "Good Evening",
    "Good Day",
    "Good morning everyone",
    "Good afternoon everyone",
    "Good evening everyone",
    "A very good day to you all",
    "Ladies and gentlemen, hello",
    "Dear team, hello",
    "Dear all, hello",
    "Warm greetings everyone",
    "Hello everyone",
    "Hi everyone",
    "Hey everyone",
];

const SALUTATION_STRONG: &[&str] = &[
    "thrilled to",
    "Pleased to",
    "Excited to",
    "I am excited to introduce myself",
    "Feeling great to be here",
    "I'm so excited to be here today",
    "I'm thrilled to introduce myself",
    "I'm absolutely delighted to share",
    "It's a pleasure to finally introduce myself",
    "I'm incredibly excited to present myself",
    "Feeling wonderful and excited to introduce myself",
    "Pleased to share my introduction",
    "Pleased to introduce myself",
    "Honored to share a bit about myself",
    "Honored to introduce myself",
    "Delighted to share my story",
    "Delighted to introduce myself",
    "Thrilled to share who I am",
    "Thrilled to introduce myself",
    "Good morning! I'm thrilled to introduce myself...",
    "Hello everyone! I'm so excited to share my background...",
    "Hi team! Pleased to finally introduce myself...",
    "Hey there! Feeling great and ready to tell you about myself...",
    "Greetings! I am absolutely delighted to present myself...",
    "Good afternoon! I'm incredibly honored to introduce myself...",
    "Hello! I can't wait to tell you about myself...",
    "Hi all! I'm bursting with excitement to introduce myself...",
    "Hey everyone! What a fantastic day to share my introduction...",
    "I'm so excited to finally introduce myself to all of you",
    "It's an absolute pleasure to have this chance to introduce myself",
    "I'm really looking forward to sharing my story with you all",
];

/// Highest tier first.
const SALUTATIONS: &[SalutationDef] = &[
    SalutationDef {
        tier: SalutationTier::Strong,
        phrases: SALUTATION_STRONG,
    },
    SalutationDef {
        tier: SalutationTier::Mid,
        phrases: SALUTATION_MID,
    },
    SalutationDef {
        tier: SalutationTier::Basic,
        phrases: SALUTATION_BASIC,
    },
];

pub fn builtin_salutations() -> &'static [SalutationDef] {
    SALUTATIONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordGroup {
    MustHave,
    GoodToHave,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordCategoryDef {
    pub id: &'static str,
    pub group: KeywordGroup,
    pub points: u32,
    pub keywords: &'static [&'static str],
}

const KW_NAME: &[&str] = &["name", "called", "myself", "I am"];
const KW_AGE: &[&str] = &["age", "years old", "I am", "old"];
const KW_SCHOOL_CLASS: &[&str] = &[
    "school",
    "of class",
    "in grade",
    "student of",
    "studying in",
    "section",
];
const KW_FAMILY: &[&str] = &[
    "family",
    "parents",
    "mother",
    "father",
    "siblings",
    "live with",
    "members",
    "family members",
];
const KW_HOBBIES: &[&str] = &[
    "hobbies",
    "interests",
    "like to",
    "free time",
    "enjoy",
    "play",
    "playing",
    "doing",
];
const KW_GOALS: &[&str] = &[
    "goal",
    "dream",
    "ambition",
    "want to be",
    "aspire",
    "favorite subject",
    "want",
    "try",
    "will",
];
const KW_ORIGIN: &[&str] = &["from", "born in", "origin", "hometown", "are from"];
const KW_UNIQUE_FACT: &[&str] = &[
    "unique",
    "fun fact",
    "interesting",
    "special",
    "people don't know",
];
const KW_STRENGTHS: &[&str] = &["strength", "achievement", "good at", "skill", "improve"];

const KEYWORD_CATEGORIES: &[KeywordCategoryDef] = &[
    KeywordCategoryDef {
        id: "name",
        group: KeywordGroup::MustHave,
        points: 4,
        keywords: KW_NAME,
    },
    KeywordCategoryDef {
        id: "age",
        group: KeywordGroup::MustHave,
        points: 4,
        keywords: KW_AGE,
    },
    KeywordCategoryDef {
        id: "school_class",
        group: KeywordGroup::MustHave,
        points: 4,
        keywords: KW_SCHOOL_CLASS,
    },
    KeywordCategoryDef {
        id: "family",
        group: KeywordGroup::MustHave,
        points: 4,
        keywords: KW_FAMILY,
    },
    KeywordCategoryDef {
        id: "hobbies",
        group: KeywordGroup::MustHave,
        points: 4,
        keywords: KW_HOBBIES,
    },
    KeywordCategoryDef {
        id: "goals",
        group: KeywordGroup::GoodToHave,
        points: 2,
        keywords: KW_GOALS,
    },
    KeywordCategoryDef {
        id: "origin",
        group: KeywordGroup::GoodToHave,
        points: 2,
        keywords: KW_ORIGIN,
    },
    KeywordCategoryDef {
        id: "unique_fact",
        group: KeywordGroup::GoodToHave,
        points: 2,
        keywords: KW_UNIQUE_FACT,
    },
    KeywordCategoryDef {
        id: "strengths",
        group: KeywordGroup::GoodToHave,
        points: 2,
        keywords: KW_STRENGTHS,
    },
];

pub fn builtin_keyword_categories() -> &'static [KeywordCategoryDef] {
    KEYWORD_CATEGORIES
}

const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah",
];

pub fn builtin_fillers() -> &'static [&'static str] {
    FILLER_WORDS
}
