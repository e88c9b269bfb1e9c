//! Database repository layer for the campground store.
//!
//! Repositories perform every query, insert, update, and delete against the store and
//! convert entity models into domain models. They are generic over the SeaORM connection
//! so the same operations run on a pooled connection or inside a transaction.

pub mod campground;
pub mod review;

#[cfg(test)]
mod test;
