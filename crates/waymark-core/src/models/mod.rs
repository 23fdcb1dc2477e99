mod faq;
mod outline;
mod trace;

pub use faq::{Answer, FilterOutcome, FilterRequest, QaPair, QaRecord, plain_text_pairs};
pub use outline::{HeadingSpan, OutlineEntry, VisibilitySample};
pub use trace::{FilterTrace, ScanReport};
