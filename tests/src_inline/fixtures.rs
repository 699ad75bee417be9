//! Shared transcripts for the inline test modules.

/// A real student introduction: 133 whitespace words, 11 sentences, in the
/// expected salutation → name → mandatory → optional → closing order.
pub const SAMPLE_INTRO: &str = "Hello everyone, myself Muskan, studying in class 8th B section from Christ Public School. 
I am 13 years old. I live with my family. There are 3 people in my family, me, my mother and my father.
One special thing about my family is that they are very kind hearted to everyone and soft spoken. One thing I really enjoy is play, playing cricket and taking wickets.
A fun fact about me is that I see in mirror and talk by myself. One thing people don't know about me is that I once stole a toy from one of my cousin.
 My favorite subject is science because it is very interesting. Through science I can explore the whole world and make the discoveries and improve the lives of others. 
Thank you for listening.";

pub const SAMPLE_WORDS: usize = 133;

/// Closing first, greeting last.
pub const SCRAMBLED_INTRO: &str = "Thank you for listening. I live with my family in Pune. \
Hello everyone. My name is Ravi.";

pub fn sample_transcript(duration_secs: f64) -> crate::input::Transcript {
    crate::input::Transcript {
        text: SAMPLE_INTRO.to_string(),
        duration_secs,
    }
}
