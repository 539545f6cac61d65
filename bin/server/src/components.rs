//! Reusable UI components.

pub mod analysis_panel;
pub mod layout;
pub mod supporting_content;

pub use analysis_panel::AnalysisPanel;
pub use layout::Layout;
pub use supporting_content::SupportingContent;
