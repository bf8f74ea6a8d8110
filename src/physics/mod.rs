//! Physical parameters
//!
//! This module describes the physics of the simulated process, separate from
//! the numerics that solve it:
//!
//! - The physics side declares the **process** (domain length, diffusion
//!   coefficient, decay rate)
//! - The solver side provides the **method** (grid, stability guard, time
//!   stepping)
//!
//! This separation allows the same physical parameters to be solved with
//! different discretizations, and the same solver to be reused across
//! parameter studies.
//!
//! # Example
//!
//! ```rust
//! use readi_rs::physics::TransportParameters;
//!
//! let parameters = TransportParameters::new(0.005, 1e-10, 2e-4);
//! assert!(parameters.validate().is_ok());
//! ```

pub mod parameters;

pub use parameters::TransportParameters;
