pub mod error;
pub mod seo;

pub use error::{
    AnalysisError, FailureKind, MetaError, Result, TransportCategory, TransportError,
};
pub use seo::{AnalysisResult, KeywordsDetailed, RawScore, UiLanguage};
