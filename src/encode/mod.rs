/// PNG data URI encoding of the drawing surface.
pub mod png;
