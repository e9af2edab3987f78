//! Frames for the project manifest and the region merge that derives one from
//! an existing manifest.

pub mod frame;
pub mod region;

pub use frame::{build_frame, Frame, FrameOrigin, FrameSource, ProjectGlobals};
pub use region::{extract_frame, find_blocks, BlockKind, StructuralBlock};
