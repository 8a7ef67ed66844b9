/// Compositing pipeline facade over a codec
pub mod executor;
/// Same-size two-image interlacing
pub mod interlace;
/// N-image round-robin interleaving
pub mod interleave;
/// Input descriptors and the image set loader
pub mod loader;
/// Stride patterns
pub mod stride;
