//! Output generation.
//!
//! - [`json`]: writes an [`Edition`](crate::models::Edition) to a dated JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2024-03-12/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

pub mod json;
