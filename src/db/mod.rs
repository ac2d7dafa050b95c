//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// User documents (keyed by user_id)
    pub const USERS: &str = "users";
}
