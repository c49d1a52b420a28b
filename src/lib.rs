//! # cmdopt - Typed option structs compiled into container argument vectors
//!
//! The manifests of the observability stack (Thanos, Alertmanager, Memcached)
//! pass every setting to their binaries as command-line flags. This library
//! lets each flag set be declared once as a typed struct and compiles it into
//! the ordered argument list that goes into a container spec.
//!
//! ## Encoding rules
//!
//! - Fields are visited in declaration order; only `pub` fields carrying an
//!   `#[opt("name[,modifier]*")]` tag are emitted.
//! - Plain values are omitted when they hold their zero value. `Option<T>`
//!   fields render whenever they are `Some`, zero or not.
//! - `Vec<T>` fields emit one flag per non-empty element.
//! - `noval` turns a boolean into a bare `--flag`; `single-hyphen` and
//!   one-character names use a `-` prefix.
//! - The first field producing output claims its option name; later fields
//!   with the same name are dropped.
//! - `#[opt(extra)]` tokens are appended last, verbatim.
//!
//! ## Example Usage
//!
//! ```rust
//! use cmdopt::components::{CompactOptions, Component};
//! use cmdopt::utils::ModelDuration;
//!
//! let mut compact = CompactOptions {
//!     data_dir: "/var/thanos/compact".into(),
//!     wait: true,
//!     retention_resolution_raw: ModelDuration::from_days(30),
//!     ..Default::default()
//! };
//! compact.extra.add(["--objstore.config=$(OBJSTORE_CONFIG)"]);
//!
//! assert_eq!(
//!     compact.args()?,
//!     vec![
//!         "compact",
//!         "--data-dir=/var/thanos/compact",
//!         "--wait",
//!         "--retention.resolution-raw=30d",
//!         "--objstore.config=$(OBJSTORE_CONFIG)",
//!     ]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Encoding never fails. Required-field checks belong to the components and
//! surface as [`components::ValidationError`]; manifest loading reports
//! through `color_eyre`.

// The derive expands to `::cmdopt::...` paths, which must also resolve here.
extern crate self as cmdopt;

pub mod components;
pub mod config;
pub mod config_loader;
pub mod encoder;
pub mod utils;

pub use cmdopt_derive::Options;
pub use encoder::{encode, walk, ExtraOpts, Field, FlagArg, FlagValue, Options, Renderable, Tag};
