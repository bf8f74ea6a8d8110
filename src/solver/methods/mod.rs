//! Numerical methods
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract solver interface (`solver::traits`)
//! and concrete implementations (`solver::methods`) keeps the trait stable
//! while new schemes are added alongside the existing ones.
//!
//! # Available Methods
//!
//! - **[`FtcsSolver`]**: Forward-Time Central-Space explicit scheme
//!   - Order: first in time, second in space
//!   - Cost: one spatial sweep per step
//!   - Conditionally stable: requires `alpha = D·dt/dx² ≤ 0.5`, enforced by
//!     the [stability guard](crate::solver::stability) before stepping
//!
//! Implicit and adaptive schemes (Crank-Nicolson, variable dt) would relax
//! the stability restriction at the price of a linear solve per step; they
//! are deliberately not part of this crate.

mod ftcs;

// Re-export for convenience
pub use ftcs::FtcsSolver;
