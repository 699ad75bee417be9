use regex::Regex;

use crate::lexicon::LexiconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Salutation,
    Name,
    Mandatory,
    Optional,
    Closing,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Salutation => "salutation",
            Section::Name => "name",
            Section::Mandatory => "mandatory",
            Section::Optional => "optional",
            Section::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionDef {
    pub section: Section,
    pub patterns: &'static [&'static str],
}

const SALUTATION: &[&str] = &[
    r"\b(hi|hello|hey|greetings)\b",
    r"\bhey there\b",
    r"\bhi there\b",
    r"\bhello there\b",
    r"\bhi all\b",
    r"\bhey all\b",
    r"\bhi team\b",
    r"\bhello team\b",
    r"\bhey team\b",
    r"\bhi everyone\b",
    r"\bhello everyone\b",
    r"\bhey everyone\b",
    r"\bgood morning\b",
    r"\bgood afternoon\b",
    r"\bgood evening\b",
    r"\bgood day\b",
    r"\bgood morning everyone\b",
    r"\bgood afternoon everyone\b",
    r"\bgood evening everyone\b",
    r"\ba very good day to you all\b",
    r"\bladies and gentlemen\b",
    r"\bdear team\b",
    r"\bdear all\b",
    r"\bwarm greetings\b",
    r"\bthrilled to\b",
    r"\bpleased to\b",
    r"\bexcited to\b",
    r"\bexcited to introduce myself\b",
    r"\bfeeling great to be here\b",
    r"\bso excited to be here\b",
    r"\bthrilled to introduce myself\b",
    r"\babsolutely delighted to share\b",
    r"\bpleasure to finally introduce myself\b",
    r"\bincredibly excited to present myself\b",
    r"\bfeeling wonderful and excited\b",
    r"\bpleased to share my introduction\b",
    r"\bpleased to introduce myself\b",
    r"\bhonored to share\b",
    r"\bhonored to introduce myself\b",
    r"\bdelighted to share my story\b",
    r"\bdelighted to introduce myself\b",
    r"\bthrilled to share who i am\b",
    r"\bcan't wait to tell you\b",
    r"\bbursting with excitement\b",
    r"\bfantastic day to share\b",
    r"\blooking forward to sharing my story\b",
];

const NAME: &[&str] = &[
    r"\bmy name is\b",
    r"\bmyself\b",
    r"\bi am\b",
    r"\bi'm\b",
    r"\bcalled\b",
    r"\bi go by\b",
    r"\bpeople call me\b",
    r"\byou can call me\b",
    r"\bthey call me\b",
    r"\bmy name's\b",
    r"\bi am known as\b",
    r"\bi'm known as\b",
    r"\bthis is\b",
];

const MANDATORY: &[&str] = &[
    // age
    r"\byears old\b",
    r"\bage\b",
    r"\bold\b",
    r"\bi am \d+\b",
    r"\bi'm \d+\b",
    r"\bmy age is\b",
    r"\bi'm aged\b",
    // school / class
    r"\bschool\b",
    r"\bof class\b",
    r"\bin grade\b",
    r"\bstudent of\b",
    r"\bstudying in\b",
    r"\bsection\b",
    r"\bfrom school\b",
    r"\bi study in\b",
    r"\bi'm a student\b",
    r"\bi attend\b",
    r"\bi go to school\b",
    r"\benrolled in\b",
    r"\bclass \d+\b",
    r"\bgrade \d+\b",
    // family
    r"\bfamily\b",
    r"\bparents\b",
    r"\bmother\b",
    r"\bfather\b",
    r"\bsiblings\b",
    r"\blive with\b",
    r"\bmembers\b",
    r"\bfamily members\b",
    r"\bpeople in my family\b",
    r"\bmy family has\b",
    r"\bthere are \d+ people\b",
    r"\bi live with my family\b",
    r"\bfamily consists of\b",
    r"\bmy mom\b",
    r"\bmy dad\b",
    r"\bmy brother\b",
    r"\bmy sister\b",
    r"\bme, my\b",
];

const OPTIONAL: &[&str] = &[
    // hobbies / interests
    r"\bhobbies\b",
    r"\binterests\b",
    r"\blike to\b",
    r"\bfree time\b",
    r"\benjoy\b",
    r"\bplay\b",
    r"\bplaying\b",
    r"\bdoing\b",
    r"\bi love\b",
    r"\bi like\b",
    r"\bi enjoy\b",
    r"\bfavorite activity\b",
    r"\bpassion\b",
    r"\bone thing i enjoy\b",
    r"\bone thing i really enjoy\b",
    // goals / dreams
    r"\bgoal\b",
    r"\bdream\b",
    r"\bambition\b",
    r"\bwant to be\b",
    r"\baspire\b",
    r"\bfavorite subject\b",
    r"\bwant\b",
    r"\btry\b",
    r"\bwill\b",
    r"\bhope to\b",
    r"\bi wish\b",
    r"\bmy aim\b",
    r"\bi plan to\b",
    r"\blooking forward to\b",
    r"\bin the future\b",
    r"\bsomeday i will\b",
    r"\bi would like to\b",
    r"\bthrough .* i can\b",
    r"\bexplore\b",
    r"\bmake discoveries\b",
    r"\bimprove the lives\b",
    // unique facts
    r"\bunique\b",
    r"\bfun fact\b",
    r"\binteresting\b",
    r"\bspecial\b",
    r"\bpeople don't know\b",
    r"\bone thing about me\b",
    r"\bspecial thing\b",
    r"\bone thing i\b",
    r"\bsomething interesting\b",
    r"\ba fun fact\b",
    r"\bpeople might not know\b",
    r"\bnot many know\b",
    r"\bsecret\b",
    r"\bone special thing\b",
    // strengths / achievements
    r"\bstrength\b",
    r"\bachievement\b",
    r"\bgood at\b",
    r"\bskill\b",
    r"\bimprove\b",
    r"\bi excel at\b",
    r"\bi'm talented\b",
    r"\bi can\b",
    r"\bi'm able to\b",
    r"\bmy strength is\b",
    r"\bproud of\b",
    r"\baccomplished\b",
    // origin
    r"\bfrom\b",
    r"\bborn in\b",
    r"\borigin\b",
    r"\bhometown\b",
    r"\bare from\b",
];

const CLOSING: &[&str] = &[
    r"\bthank you\b",
    r"\bthanks\b",
    r"\bthank you for listening\b",
    r"\bthanks for your time\b",
    r"\bappreciate\b",
    r"\bgrateful\b",
    r"\bthat's all\b",
    r"\bthat's it\b",
    r"\bthat's me\b",
    r"\bthat's all about me\b",
    r"\bthank you for your attention\b",
    r"\bthanks for hearing me out\b",
    r"\bi appreciate your time\b",
    r"\blooking forward\b",
    r"\bnice meeting you\b",
    r"\bpleasure to share\b",
    r"\bglad to share\b",
    r"\bhappy to share\b",
];

/// Priority order: a sentence belongs to the first section with a hit.
const SECTIONS: &[SectionDef] = &[
    SectionDef {
        section: Section::Salutation,
        patterns: SALUTATION,
    },
    SectionDef {
        section: Section::Name,
        patterns: NAME,
    },
    SectionDef {
        section: Section::Mandatory,
        patterns: MANDATORY,
    },
    SectionDef {
        section: Section::Optional,
        patterns: OPTIONAL,
    },
    SectionDef {
        section: Section::Closing,
        patterns: CLOSING,
    },
];

pub fn builtin_sections() -> &'static [SectionDef] {
    SECTIONS
}

#[derive(Debug, Clone)]
pub struct SectionMatcher {
    pub section: Section,
    patterns: Vec<Regex>,
}

impl SectionMatcher {
    pub fn is_match(&self, sentence_lower: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(sentence_lower))
    }
}

#[derive(Debug, Clone)]
pub struct FlowPatterns {
    pub matchers: Vec<SectionMatcher>,
}

impl FlowPatterns {
    pub fn compile(defs: &[SectionDef]) -> Result<Self, LexiconError> {
        let mut matchers = Vec::with_capacity(defs.len());
        for def in defs {
            let mut patterns = Vec::with_capacity(def.patterns.len());
            for &pattern in def.patterns {
                let re = Regex::new(pattern).map_err(|source| LexiconError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                patterns.push(re);
            }
            matchers.push(SectionMatcher {
                section: def.section,
                patterns,
            });
        }
        Ok(Self { matchers })
    }

    pub fn builtin() -> Result<Self, LexiconError> {
        Self::compile(builtin_sections())
    }

    /// Section of a lower-cased sentence, if any pattern family matches.
    pub fn classify(&self, sentence_lower: &str) -> Option<Section> {
        self.matchers
            .iter()
            .find(|m| m.is_match(sentence_lower))
            .map(|m| m.section)
    }
}
