use serde::{Deserialize, Serialize};

use crate::adjust::Adjustments;
use crate::aspect::AspectRatio;
use crate::consts::DEFAULT_BRUSH_SIZE;
use crate::edit::UiCode;

use super::event::SessionEvent;

/// Input tool acting on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    /// Click to select an object.
    Select,
}

/// Optional features that distinguish the editor variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub object_select: bool,
    /// Generate HTML and CSS from the current image.
    pub ui_code: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            object_select: true,
            ui_code: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub history: Vec<String>,
    /// Index of the current image in `history`; `None` when empty.
    pub history_index: Option<usize>,
    pub aspect_ratio: AspectRatio,
    pub adjustments: Adjustments,
    pub brush_size: f64,
    pub tool: Tool,
    pub prompt: String,
    /// Current mask payload; `None` means edits apply globally.
    pub mask: Option<String>,
    /// Bumped on every mask clear so canvas holders know to wipe their raster.
    pub mask_generation: u64,
    pub reference: Option<String>,
    pub previews: Vec<String>,
    /// Last generated UI code, when the capability is enabled.
    pub ui_code: Option<UiCode>,
    pub loading: bool,
    pub error: Option<String>,
    pub capabilities: Capabilities,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

impl EditorState {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            history: Vec::new(),
            history_index: None,
            aspect_ratio: AspectRatio::Original,
            adjustments: Adjustments::default(),
            brush_size: DEFAULT_BRUSH_SIZE,
            tool: Tool::Brush,
            prompt: String::new(),
            mask: None,
            mask_generation: 0,
            reference: None,
            previews: Vec::new(),
            ui_code: None,
            loading: false,
            error: None,
            capabilities,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.history_index
            .and_then(|i| self.history.get(i))
            .map(String::as_str)
    }

    pub fn can_undo(&self) -> bool {
        self.history_index.is_some_and(|i| i > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.history_index
            .is_some_and(|i| i + 1 < self.history.len())
    }

    pub fn has_selection(&self) -> bool {
        self.mask.is_some()
    }

    /// Apply one event and return the resulting state.
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::Uploaded(image) => Self {
                history: vec![image],
                history_index: Some(0),
                aspect_ratio: AspectRatio::Original,
                adjustments: Adjustments::default(),
                tool: Tool::Brush,
                prompt: String::new(),
                reference: None,
                previews: Vec::new(),
                loading: false,
                error: None,
                ..self.without_mask()
            },
            SessionEvent::AspectRatioChanged(aspect_ratio) => Self {
                aspect_ratio,
                ..self
            },
            SessionEvent::AdjustmentsChanged(adjustments) => Self {
                adjustments,
                ..self
            },
            SessionEvent::AdjustmentsReset => Self {
                adjustments: Adjustments::default(),
                ..self
            },
            SessionEvent::BrushSizeChanged(brush_size) => Self { brush_size, ..self },
            SessionEvent::ToolChanged(Tool::Select) if !self.capabilities.object_select => self,
            SessionEvent::ToolChanged(tool) => Self { tool, ..self },
            SessionEvent::PromptChanged(prompt) => Self { prompt, ..self },
            SessionEvent::MaskResolved(mask) => Self {
                mask: Some(mask),
                ..self
            },
            SessionEvent::MaskCleared => self.without_mask(),
            SessionEvent::ReferenceSet(reference) => Self { reference, ..self },
            SessionEvent::GenerationStarted => Self {
                adjustments: Adjustments::default(),
                previews: Vec::new(),
                loading: true,
                error: None,
                ..self
            },
            SessionEvent::PreviewsReady(previews) if previews.is_empty() => Self {
                loading: false,
                error: Some("no previews could be generated".to_string()),
                ..self
            },
            SessionEvent::PreviewsReady(previews) => Self {
                previews,
                loading: false,
                ..self
            },
            SessionEvent::GenerationFailed(message) => Self {
                previews: Vec::new(),
                loading: false,
                error: Some(message),
                ..self
            },
            SessionEvent::PreviewApplied(image) => {
                let mut next = self.without_mask();
                let keep = next.history_index.map_or(0, |i| i + 1);
                next.history.truncate(keep);
                next.history.push(image);
                next.history_index = Some(next.history.len() - 1);
                Self {
                    previews: Vec::new(),
                    prompt: String::new(),
                    reference: None,
                    ..next
                }
            }
            SessionEvent::PreviewsCancelled => Self {
                previews: Vec::new(),
                ..self
            },
            SessionEvent::ObjectSelected(mask) => Self {
                mask: Some(mask),
                tool: Tool::Brush,
                ..self.without_mask()
            },
            SessionEvent::UiCodeStarted if self.capabilities.ui_code => Self {
                ui_code: None,
                loading: true,
                error: None,
                ..self
            },
            SessionEvent::UiCodeGenerated(code) if self.capabilities.ui_code => Self {
                ui_code: Some(code),
                loading: false,
                ..self
            },
            SessionEvent::UiCodeStarted | SessionEvent::UiCodeGenerated(_) => self,
            // The mask belongs to the image it was drawn on.
            SessionEvent::Undo if self.can_undo() => {
                let index = self.history_index.map(|i| i - 1);
                Self {
                    history_index: index,
                    adjustments: Adjustments::default(),
                    ..self.without_mask()
                }
            }
            SessionEvent::Redo if self.can_redo() => {
                let index = self.history_index.map(|i| i + 1);
                Self {
                    history_index: index,
                    adjustments: Adjustments::default(),
                    ..self.without_mask()
                }
            }
            SessionEvent::Undo | SessionEvent::Redo => self,
            SessionEvent::Reset => Self::new(self.capabilities),
        }
    }

    fn without_mask(self) -> Self {
        Self {
            mask: None,
            mask_generation: self.mask_generation + 1,
            ..self
        }
    }
}
