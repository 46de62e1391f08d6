use thiserror::Error;

/// An error that aborts a binding pass.
///
/// Anything a mesh may simply lack (a convention, a shape, a slot) is not an
/// error; see [`PassOutcome`](crate::PassOutcome) and
/// [`SkipReason`](crate::SkipReason).
#[derive(Error, Debug)]
pub enum PassError {
    #[error("failed to load blend shape mesh: {mesh}")]
    MeshLoad { mesh: String },
}
