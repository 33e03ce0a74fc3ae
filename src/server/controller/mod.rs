//! HTTP request handlers.
//!
//! Controllers read the request, hand the work to a service and convert the resulting
//! domain model into a DTO. Failures are returned as `AppError` and mapped to JSON
//! error bodies by its `IntoResponse` implementation.

pub mod inspection;

#[cfg(test)]
mod test;
