pub mod input;
pub mod loaders;
pub mod product;
pub mod queue;

pub use input::{ActorInput, StartUrl};
pub use loaders::load_input;
pub use product::{DatasetEntry, ProductRecord, VariantRecord};
pub use queue::{PendingRequest, QueueItem, RequestQueue};
