//! Display model for checklist steps.
//!
//! Only the expanded step carries a body. Documents are split into PDF tiles,
//! which open externally, and image tiles, which can be previewed full screen.

use prolio_core::checklist::StepContent;
use prolio_core::entities::DocumentRef;
use prolio_core::enums::DocumentKind;
use serde::Serialize;

use crate::controller::GateController;

pub const VERIFY_ACTION_LABEL: &str = "Verify and continue";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentTile {
    Pdf { name: String, open_url: String },
    Image { name: String, url: String },
}

impl DocumentTile {
    #[must_use]
    pub fn from_document(document: &DocumentRef) -> Self {
        match document.kind() {
            DocumentKind::Pdf => Self::Pdf {
                name: document.name.clone(),
                open_url: document.url.clone(),
            },
            DocumentKind::Image => Self::Image {
                name: document.name.clone(),
                url: document.url.clone(),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Pdf { name, .. } | Self::Image { name, .. } => name,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Pdf { open_url, .. } => open_url,
            Self::Image { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum StepBody {
    Fields(Vec<(String, String)>),
    Documents(Vec<DocumentTile>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub index: usize,
    pub title: String,
    pub completed: bool,
    pub expanded: bool,
    /// Present only for the expanded step.
    pub body: Option<StepBody>,
    /// Label of the verify action, present only for the expanded step.
    pub action: Option<&'static str>,
}

#[must_use]
pub fn render_steps(controller: &GateController) -> Vec<StepView> {
    controller
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let expanded = controller.open_index() == Some(index);
            let body = expanded.then(|| match &step.content {
                StepContent::Fields(pairs) => StepBody::Fields(pairs.clone()),
                StepContent::Documents(docs) => {
                    StepBody::Documents(docs.iter().map(DocumentTile::from_document).collect())
                }
            });
            StepView {
                index,
                title: step.title.clone(),
                completed: controller.is_completed(index),
                expanded,
                body,
                action: expanded.then_some(VERIFY_ACTION_LABEL),
            }
        })
        .collect()
}

/// Full-screen preview of an image tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewOverlay {
    current: Option<DocumentTile>,
}

impl PreviewOverlay {
    /// Show `tile`. PDF tiles are not previewed; returns whether the overlay opened.
    pub fn open(&mut self, tile: &DocumentTile) -> bool {
        if matches!(tile, DocumentTile::Image { .. }) {
            self.current = Some(tile.clone());
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub const fn current(&self) -> Option<&DocumentTile> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prolio_core::checklist::ChecklistStep;

    fn controller() -> GateController {
        GateController::new(vec![
            ChecklistStep {
                title: "Details".into(),
                content: StepContent::Fields(vec![("GST number".into(), "29AB".into())]),
            },
            ChecklistStep {
                title: "Documents".into(),
                content: StepContent::Documents(vec![
                    DocumentRef::new("GST", "https://cdn.prolio.test/gst.PDF?v=2"),
                    DocumentRef::new("Storefront", "https://cdn.prolio.test/front.jpg"),
                ]),
            },
        ])
    }

    #[test]
    fn collapsed_steps_have_no_body() {
        let views = render_steps(&controller());
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|v| v.body.is_none() && v.action.is_none()));
    }

    #[test]
    fn expanded_step_classifies_documents() {
        let mut gate = controller();
        gate.open_step(1).unwrap();
        let views = render_steps(&gate);

        assert!(views[0].body.is_none());
        assert_eq!(views[1].action, Some(VERIFY_ACTION_LABEL));
        assert_eq!(
            views[1].body,
            Some(StepBody::Documents(vec![
                DocumentTile::Pdf {
                    name: "GST".into(),
                    open_url: "https://cdn.prolio.test/gst.PDF?v=2".into(),
                },
                DocumentTile::Image {
                    name: "Storefront".into(),
                    url: "https://cdn.prolio.test/front.jpg".into(),
                },
            ]))
        );
    }

    #[test]
    fn completed_flag_follows_controller() {
        let mut gate = controller();
        gate.open_step(0).unwrap();
        gate.mark_verified(0).unwrap();
        let views = render_steps(&gate);
        assert!(views[0].completed);
        assert!(!views[1].completed);
    }

    #[test]
    fn overlay_only_previews_images() {
        let mut overlay = PreviewOverlay::default();
        let pdf = DocumentTile::Pdf {
            name: "GST".into(),
            open_url: "gst.pdf".into(),
        };
        let image = DocumentTile::Image {
            name: "Front".into(),
            url: "front.png".into(),
        };

        assert!(!overlay.open(&pdf));
        assert!(!overlay.is_open());
        assert!(overlay.open(&image));
        assert_eq!(overlay.current(), Some(&image));
        overlay.close();
        assert!(overlay.current().is_none());
    }
}
