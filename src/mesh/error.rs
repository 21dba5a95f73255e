/// Errors related to building [Meshes](super::Mesh).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid value for parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
    #[error("vertex buffer length {0} is not a multiple of the 36-byte vertex record")]
    InvalidBufferSize(usize),
}
