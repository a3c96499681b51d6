pub mod reconcile;
pub mod transform;
pub mod validate;
