//! Shoplist Export - PDF rendering of the displayed list.
//!
//! Produces a titled two-column table (`Name`, `Category`) with one row per
//! displayed item, in display order. Rows that do not fit on an A4 page
//! continue on further pages under a repeated header.
//!
//! # Example
//!
//! ```
//! use shoplist_export::{ExportOptions, PdfExporter};
//! use shoplist_list::ShoppingItem;
//!
//! let milk = ShoppingItem::new("Leite", "Laticínios");
//! let pdf = PdfExporter::new(ExportOptions::default())
//!     .render(&[&milk])
//!     .expect("render");
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod encoding;
pub mod error;
pub mod layout;
pub mod pdf;

pub use error::{ExportError, Result};
pub use layout::PageLayout;
pub use pdf::{ExportOptions, PdfExporter};
