pub mod button;
pub mod cta_section;
pub mod reveal;
pub mod scroll_indicator;
pub mod section_subtitle;

pub use button::Button;
pub use cta_section::CtaSection;
pub use reveal::Reveal;
pub use scroll_indicator::ScrollIndicator;
pub use section_subtitle::{SectionSubtitle, SubtitleVariant};
