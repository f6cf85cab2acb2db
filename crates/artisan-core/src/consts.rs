/// Edge length of one checkerboard pattern tile, in display pixels.
/// Each tile holds two dark squares of half this size on a lighter base.
pub const CHECKER_TILE_SIZE: u32 = 20;

/// Base color of the checkerboard (`#4a5568`).
pub const CHECKER_LIGHT: [u8; 3] = [0x4a, 0x55, 0x68];

/// Color of the top-left and bottom-right checkerboard squares (`#2d3748`).
pub const CHECKER_DARK: [u8; 3] = [0x2d, 0x37, 0x48];

/// Opacity of mask strokes on the display overlay.
/// Below 1.0 so the live overlay reads differently from the resolved mask.
pub const MASK_PREVIEW_ALPHA: f32 = 0.7;

/// Default brush diameter in display pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 30.0;

/// Smallest brush diameter accepted by the mask surface.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// Largest brush diameter accepted by the mask surface.
pub const MAX_BRUSH_SIZE: f64 = 500.0;

/// Neutral value for every percentage adjustment.
pub const NEUTRAL_ADJUSTMENT: f32 = 100.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Luminance weights used by the saturate color matrix (CSS Filter Effects).
pub const SATURATE_LUMA_R: f32 = 0.213;
pub const SATURATE_LUMA_G: f32 = 0.715;
pub const SATURATE_LUMA_B: f32 = 0.072;

/// Smallest radius of the object-select marker dot, in image pixels.
pub const SELECT_MARKER_MIN_RADIUS: f32 = 5.0;

/// Marker radius as a fraction of the image's natural width.
pub const SELECT_MARKER_RADIUS_FRACTION: f32 = 0.005;

/// Marker dot color (magenta).
pub const SELECT_MARKER_COLOR: [u8; 3] = [255, 0, 255];

/// Default number of preview variants requested per generation.
pub const DEFAULT_PREVIEW_COUNT: usize = 3;

/// Maximum backing-store edge of the display canvas and mask raster.
pub const MAX_CANVAS_DIMENSION: u32 = 32_767;

/// Opacity of the mask overlay when composited over the display canvas.
pub const MASK_OVERLAY_OPACITY: f32 = 0.8;
