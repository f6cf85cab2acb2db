use crate::adjust::Adjustments;
use crate::aspect::AspectRatio;
use crate::edit::UiCode;

use super::state::Tool;

/// Everything that can happen to an editor session.
///
/// Image and mask values are opaque handles (payloads or ids) owned by the
/// caller.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// A new base image was uploaded; starts a fresh history.
    Uploaded(String),
    AspectRatioChanged(AspectRatio),
    AdjustmentsChanged(Adjustments),
    AdjustmentsReset,
    BrushSizeChanged(f64),
    ToolChanged(Tool),
    PromptChanged(String),
    /// A stroke completed and produced this mask payload.
    MaskResolved(String),
    MaskCleared,
    ReferenceSet(Option<String>),
    GenerationStarted,
    PreviewsReady(Vec<String>),
    GenerationFailed(String),
    /// One preview was accepted and becomes the current image.
    PreviewApplied(String),
    PreviewsCancelled,
    /// UI-code generation began; ignored unless the capability is enabled.
    UiCodeStarted,
    UiCodeGenerated(UiCode),
    /// Object selection returned a mask.
    ObjectSelected(String),
    Undo,
    Redo,
    /// Close the image and return to the empty state.
    Reset,
}
