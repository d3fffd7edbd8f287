//! Fixed-capacity containers
//!
//! Every container here fails closed: inserting into a full container is a
//! no-op reported as `false`, never a reallocation past the bound fixed at
//! construction.

mod int_set;
mod queue;
mod sorted_list;
mod stack;

pub use int_set::BoundedIntSet;
pub use queue::BoundedQueue;
pub use sorted_list::SortedList;
pub use stack::BoundedStack;
