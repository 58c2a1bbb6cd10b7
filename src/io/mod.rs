pub mod input;
pub mod output;

pub use input::{parse_transcript_file, read_transcript};
pub use output::{ReportRenderer, ReportWriter};
