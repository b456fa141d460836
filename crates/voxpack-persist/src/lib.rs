pub mod compat;
pub mod compress;
pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::MeshHeader;
pub use load::{load, LoadedMesh};
pub use save::{save, ChunkMesh};
