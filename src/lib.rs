// Devprof - Library Entry Point
//
// Deterministic device profile allocation: every identifier maps to a stable
// device profile drawn from a weighted template catalog.

pub mod constants;
pub mod error;
pub mod hash;
pub mod store;
pub mod catalog;
pub mod allocator;
pub mod settings;

pub use allocator::{
    AllocatorConfig, AssignmentFilter, CategoryWeights, ClassificationMode, DeviceProfileAllocator,
    MaterializedProfile, Summary,
};
pub use catalog::{Catalog, Category, ProfileTemplate};
pub use error::{DevprofError, Result};
pub use hash::DigestAlgorithm;
pub use settings::Settings;
pub use store::{FsStore, MemoryStore, TextStore};
