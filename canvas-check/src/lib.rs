//! Pixel assertions over rendered surfaces, and the Canvas 2D `lineCap`
//! conformance cases that exercise them.
//!
//! The core primitive is [`assert_pixel`]: read one pixel and compare it
//! exactly against an expected RGBA tuple. Conformance cases choose their
//! sample coordinates away from anti-aliased edges, so the comparison itself
//! needs no color tolerance.
//!
//! ```rust
//! use canvas_check::{assert_pixel, Rgba, Surface};
//!
//! let surface = Surface::filled(100, 50, Rgba::new(0, 255, 0, 255))?;
//! assert_pixel(&surface, 17, 6, 0, 255, 0, 255)?;
//! assert!(assert_pixel(&surface, 100, 6, 0, 255, 0, 255).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assert;
pub mod cases;
pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod runner;
pub mod surface;

pub use assert::{assert_pixel, assert_pixel_approx, SampleRequest};
pub use cases::ConformanceCase;
pub use config::RunConfig;
pub use error::{AssertionError, CaseError, CheckError, CheckResult};
pub use harness::{Harness, TestHandle, TestOutcome, TestStatus};
pub use report::RunReport;
pub use runner::{run_case, run_cases};
pub use surface::{PixelSource, Rgba, Surface};
