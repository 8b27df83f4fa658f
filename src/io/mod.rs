//! Export of generated solids for slicers and viewers

#[cfg(feature = "stl-io")]
pub mod stl;
