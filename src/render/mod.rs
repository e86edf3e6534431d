//! Presentation of analysis results
//!
//! Pure functions of an `AnalysisResult`: meta tag markup, the score view
//! and the export formats. Nothing here talks to the network.

pub mod export;
pub mod meta_tags;
pub mod score;

pub use export::{ExportFormat, render_export, text_summary, write_export};
pub use meta_tags::{escape_html, generate_html, meta_tag_lines};
pub use score::{ScoreGrade, ScoreReport, normalize_score};
