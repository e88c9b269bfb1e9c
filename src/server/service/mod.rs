//! Business logic layer sitting between controllers and repositories.
//!
//! Services are the only path through which controllers read or write the store. Each
//! service borrows the shared connection pool and composes repository calls, opening a
//! transaction where one operation spans several writes.

pub mod campground;
pub mod review;

#[cfg(test)]
mod test;
