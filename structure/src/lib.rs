//! Map named, fixed-capacity fields onto a contiguous byte buffer.
//!
//! # Overview
//!
//! A [Structure] is a record whose fields are declared up front with a
//! [FieldDescriptor] (name, [Encoding], capacity). The [Layout] places every
//! field back to back in one buffer, which is allocated once and never
//! resized. Values are written and read by field name:
//!
//! - `utf16`: text stored as UTF-16 code units, up to the field's capacity.
//! - `u16`: a single unsigned 16-bit integer.
//!
//! Text fields are fixed-width: reading one always returns exactly `capacity`
//! code units, so a shorter value comes back padded with NUL characters and a
//! longer one is truncated (see [codec] for the exact contract and [Overflow]
//! to reject instead).
//!
//! # Example
//!
//! ```
//! use primer_structure::{FieldDescriptor, Structure, Value};
//!
//! let mut jack = Structure::new([
//!     FieldDescriptor::utf16("name", 4),
//!     FieldDescriptor::utf16("lastName", 5),
//!     FieldDescriptor::try_from(("age", "u16")).unwrap(),
//! ])
//! .unwrap();
//!
//! jack.set("name", "Jack").unwrap();
//! jack.set("lastName", "Black").unwrap();
//! jack.set("age", 53).unwrap();
//!
//! assert_eq!(jack.get("name").unwrap(), Value::from("Jack"));
//! assert_eq!(jack.get("lastName").unwrap(), Value::from("Black"));
//! assert_eq!(jack.get("age").unwrap(), Value::from(53));
//! ```

pub mod codec;
mod config;
mod descriptor;
mod encoding;
mod error;
mod layout;
mod structure;
mod value;
pub mod view;

pub use config::{Config, Overflow};
pub use descriptor::FieldDescriptor;
pub use encoding::{Encoding, UNIT_SIZE};
pub use error::Error;
pub use layout::{Field, Layout, DEFAULT_CAPACITY};
pub use structure::Structure;
pub use value::Value;
