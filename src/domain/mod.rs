// Sigmoid curve request/response model
pub mod curve;

// Classification demo model
pub mod demo;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
