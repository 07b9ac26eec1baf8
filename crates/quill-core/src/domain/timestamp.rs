//! Timestamp policy for `createdAt` / `updatedAt`.

use chrono::Utc;

/// Render the current UTC instant as `YYYY-MM-DD HH:MM:SS`.
///
/// Second precision, no timezone suffix. Create and update both stamp with
/// this function, so timestamp ordering stays valid lexicographically.
pub fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
