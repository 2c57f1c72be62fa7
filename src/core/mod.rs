//! 한글 음절 연산과 문장 분리

pub mod patterns;
pub mod segmenter;
pub mod unicode;
