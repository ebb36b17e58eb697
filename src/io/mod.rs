//! I/O layer: the `ImageCodec` capability the cropper decodes, crops and
//! encodes through, and its `image`-crate backed PNG implementation.
pub mod codec;
pub use codec::{ImageCodec, PngCodec};
