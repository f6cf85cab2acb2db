use crate::mask::MaskBitmap;
use crate::output_size::OutputSize;

/// Collaborator sinks fed by [`ImageCanvas`](super::ImageCanvas).
///
/// All methods have default no-op implementations.
pub trait CanvasObserver: Send + Sync {
    /// The output resolution changed. Called once per distinct value.
    fn output_size_changed(&self, _size: OutputSize) {}

    /// A stroke completed and the mask was resolved at output resolution.
    fn mask_resolved(&self, _mask: &MaskBitmap) {}

    /// The mask was cleared; edits now apply to the whole image.
    fn mask_cleared(&self, _generation: u64) {}
}

/// Observer that ignores every notification.
pub struct NoOpObserver;
impl CanvasObserver for NoOpObserver {}
