pub mod rubric;
pub mod scores;
pub mod thresholds;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
