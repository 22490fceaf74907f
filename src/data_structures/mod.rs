pub mod path_record;
pub mod priority_queue;

pub use path_record::PathRecord;
pub use priority_queue::IndexedMinHeap;
