//! CPU compositor: pixel buffer, overlay passes, captions, and the generation pipeline.

/// Owned RGB8 pixel buffer.
pub mod canvas;
/// Base raster, radial glow and rhythmic line passes.
pub mod compose;
/// `Generator`: profile in, canvas out.
pub mod pipeline;
/// Caption layer.
pub mod text;
