//! Inline PDF renderer configuration.
//!
//! The renderer accepts exactly these fields; anything the page wants to
//! pass must be named here rather than forwarded blindly.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Zoom {
    FitWidth,
    FitPage,
    Percent(u16),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfViewerOptions {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub initial_page: u32,
    pub zoom: Zoom,
    pub show_toolbar: bool,
}

impl PdfViewerOptions {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            title: None,
            initial_page: 1,
            zoom: Zoom::FitWidth,
            show_toolbar: true,
        }
    }

    /// JSON blob embedded in the document shell's mount point for the
    /// renderer to pick up. The struct has no side effects or state of
    /// its own.
    pub fn mount_config(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_page_one_fit_width() {
        let options = PdfViewerOptions::new("/files/report.pdf");

        assert_eq!(options.initial_page, 1);
        assert_eq!(options.zoom, Zoom::FitWidth);
        assert!(options.show_toolbar);
    }

    #[test]
    fn mount_config_names_every_field() {
        let mut options = PdfViewerOptions::new("/files/report.pdf");
        options.title = Some("Q2 report".to_string());
        options.initial_page = 4;

        let json: serde_json::Value =
            serde_json::from_str(&options.mount_config().unwrap()).unwrap();

        assert_eq!(json["fileUrl"], "/files/report.pdf");
        assert_eq!(json["title"], "Q2 report");
        assert_eq!(json["initialPage"], 4);
        assert_eq!(json["zoom"], "fitWidth");
        assert_eq!(json["showToolbar"], true);
    }

    #[test]
    fn percent_zoom_carries_its_value() {
        let mut options = PdfViewerOptions::new("/files/report.pdf");
        options.zoom = Zoom::Percent(150);

        let json: serde_json::Value =
            serde_json::from_str(&options.mount_config().unwrap()).unwrap();

        assert_eq!(json["zoom"]["percent"], 150);
    }
}
