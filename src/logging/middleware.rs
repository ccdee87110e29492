//! Request ID generation

use uuid::Uuid;

/// Generate a new request ID using UUID v4
///
/// Returns a unique correlation ID that ties together the log lines emitted
/// while handling one routing request.
///
/// # Examples
///
/// ```
/// use delegator::logging::generate_request_id;
///
/// let request_id = generate_request_id();
/// assert!(!request_id.is_empty());
/// ```
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
