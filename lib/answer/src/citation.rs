//! Citation selection and embed URL resolution.
//!
//! Cited documents live in SharePoint. The citation tab shows them in an
//! iframe through the Office web viewer, and the viewer URL depends on the
//! file type. Resolution never fails: unknown or missing inputs yield an
//! empty URL and the iframe simply renders nothing.

use crate::response::DataPoint;
use graph_search_chat_core::CitationId;
use serde::{Deserialize, Serialize};

/// Host of the SharePoint tenant that serves PowerPoint embed views.
pub const DEFAULT_PPTX_EMBED_HOST: &str = "https://m365x52168024.sharepoint.com";

/// File types the citation viewer can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pptx,
    Xlsx,
    Docx,
    Pdf,
}

impl FileKind {
    /// Derives the file kind from the text after the last `.` of a file name.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = file_name.rsplit('.').next()?.to_lowercase();
        match extension.as_str() {
            "pptx" => Some(Self::Pptx),
            "xlsx" => Some(Self::Xlsx),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Viewer URL templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedTemplates {
    /// Host used for PowerPoint embeds, which ignore the document's own site.
    pub pptx_host: String,
}

impl Default for EmbedTemplates {
    fn default() -> Self {
        Self {
            pptx_host: DEFAULT_PPTX_EMBED_HOST.to_string(),
        }
    }
}

impl EmbedTemplates {
    /// Creates templates that embed PowerPoint files from the given host.
    #[must_use]
    pub fn new(pptx_host: impl Into<String>) -> Self {
        Self {
            pptx_host: pptx_host.into(),
        }
    }

    /// Resolves the viewer URL for a cited document.
    ///
    /// Returns an empty string when the file name is missing or its
    /// extension is not one of pptx, xlsx, docx or pdf.
    #[must_use]
    pub fn resolve(
        &self,
        file_name: Option<&str>,
        web_url: Option<&str>,
        citation: Option<&str>,
    ) -> String {
        let Some(file_name) = file_name.filter(|name| !name.is_empty()) else {
            return String::new();
        };
        let Some(kind) = FileKind::from_file_name(file_name) else {
            return String::new();
        };

        let citation = citation.unwrap_or_default();
        let base = web_url.map(site_base).unwrap_or_default();

        match kind {
            FileKind::Pptx => format!(
                "{}/_layouts/15/Doc.aspx?sourcedoc={{{citation}}}&action=embedview&wdAr=1.7777777777777777",
                self.pptx_host.trim_end_matches('/')
            ),
            FileKind::Xlsx => format!(
                "{base}/_layouts/15/Doc.aspx?sourcedoc={{{citation}}}&action=embedview&wdAllowInteractivity=False&wdDownloadButton=True&wdInConfigurator=True&wdInConfigurator=True"
            ),
            FileKind::Docx => {
                format!("{base}/_layouts/15/Doc.aspx?sourcedoc={{{citation}}}&action=embedview")
            }
            FileKind::Pdf => format!("{base}/_layouts/15/embed.aspx?UniqueId={citation}"),
        }
    }
}

/// Drops the last two path segments of a document URL, leaving the site URL.
fn site_base(web_url: &str) -> String {
    let segments: Vec<&str> = web_url.split('/').collect();
    let keep = segments.len().saturating_sub(2);
    segments[..keep].join("/")
}

/// Resolves the viewer URL with the default templates.
///
/// See [`EmbedTemplates::resolve`].
#[must_use]
pub fn embed_url(file_name: Option<&str>, web_url: Option<&str>, citation: Option<&str>) -> String {
    EmbedTemplates::default().resolve(file_name, web_url, citation)
}

/// The citation currently selected in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCitation {
    pub id: Option<CitationId>,
    pub file_name: Option<String>,
    pub web_url: Option<String>,
}

impl ActiveCitation {
    /// Creates a selection with every field present.
    #[must_use]
    pub fn new(
        id: impl Into<CitationId>,
        file_name: impl Into<String>,
        web_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            file_name: Some(file_name.into()),
            web_url: Some(web_url.into()),
        }
    }

    /// Selects the document behind a supporting content item.
    #[must_use]
    pub fn from_data_point(point: &DataPoint) -> Self {
        Self {
            id: Some(point.id.clone()),
            file_name: Some(point.file_name().to_string()),
            web_url: Some(point.web_url.clone()),
        }
    }

    /// Returns true when a citation is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.id.as_ref().is_some_and(|id| !id.as_str().is_empty())
    }

    /// Resolves the viewer URL with the default templates.
    #[must_use]
    pub fn embed_url(&self) -> String {
        self.embed_url_with(&EmbedTemplates::default())
    }

    /// Resolves the viewer URL with the given templates.
    #[must_use]
    pub fn embed_url_with(&self, templates: &EmbedTemplates) -> String {
        templates.resolve(
            self.file_name.as_deref(),
            self.web_url.as_deref(),
            self.id.as_ref().map(CitationId::as_str),
        )
    }
}
