pub mod color;
pub mod map;
pub mod playback;
pub mod selection;

pub use color::{ColorAssignment, DEFAULT_FILL, HslColor, assign_colors, encode};
pub use map::ChoroplethMap;
pub use playback::{FRAME_INTERVAL, PlaybackData, PlaybackScheduler};
pub use selection::{
    RowStats, SelectionController, SelectionOutcome, SelectionView, TableRow, table_row,
};
