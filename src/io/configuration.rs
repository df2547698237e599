//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 20;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 20;
/// Default pause between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// A fair source rejects at most three draws in four (the end of a 1-wide
// corridor), so this many consecutive rejections means a broken source
/// Consecutive out-of-bounds direction draws tolerated before a walk aborts
pub const MAX_DIRECTION_REDRAWS: usize = 1024;

// Raster export settings
/// Side length of a cell interior in pixels
pub const CELL_PIXELS: u32 = 8;
/// Thickness of a wall in pixels
pub const WALL_PIXELS: u32 = 2;
/// Largest image, in pixels, that PNG or GIF export will rasterize (256 MiB as RGBA)
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;
/// Wall color
pub const WALL_COLOR: [u8; 4] = [20, 20, 20, 255];
/// Color of cells absorbed into the tree
pub const PASSAGE_COLOR: [u8; 4] = [245, 245, 240, 255];
/// Color of cells not yet absorbed into the tree
pub const UNVISITED_COLOR: [u8; 4] = [120, 120, 130, 255];
/// Color of the root cell
pub const ROOT_COLOR: [u8; 4] = [200, 60, 60, 255];
/// Color of cells on the in-progress walk
pub const TRAIL_COLOR: [u8; 4] = [70, 130, 200, 255];
/// Color of the walk's current position
pub const CURSOR_COLOR: [u8; 4] = [240, 190, 40, 255];

// Animation output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the last GIF frame so the finished maze lingers
pub const FINAL_FRAME_HOLD: u32 = 40;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
