//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const WORKOUTS: &str = "workouts";
    pub const NUTRITION: &str = "nutrition";
}
