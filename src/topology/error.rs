use thiserror::Error;

/// Failure to read a topology or dimensionality tag.
///
/// The generator never surfaces these to its caller; [`super::generate`]
/// turns them into an empty graph or the 2D default.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseTopologyError {
	/// Not one of the known topology tags.
	#[error("unknown topology kind {0:?}")]
	UnknownKind(String),
	/// Neither 2D nor 3D.
	#[error("unknown dimensionality {0:?}, expected \"2D\" or \"3D\"")]
	UnknownMode(String),
}
