//! # lottie-recolor
//!
//! Recolors Lottie animations to match a named palette.
//!
//! Static colors in a document are classified by an ordered rule table
//! ([`RuleTable`]) into palette roles and replaced with the scheme's color
//! for that role, keeping the original alpha. The same table drives both the
//! runtime path ([`remap_colors`], [`Recolorer`]) and the offline variant
//! build ([`build_variants`]).
//!
//! ```no_run
//! use lottie_data::Document;
//! use lottie_recolor::{remap_colors, SchemeKind, Thresholds};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Document::from_path("assets/Animation.json")?;
//! let kind = SchemeKind::from_burnout(42.0, &Thresholds::default());
//! let themed = remap_colors(&base, &kind.scheme());
//! # let _ = themed;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod elide;
pub mod error;
pub mod gradient;
pub mod remap;
pub mod rules;
pub mod scheme;
pub mod variants;

pub use color::{Rgb, Rgba};
pub use config::{RecolorConfig, VariantTarget};
pub use elide::{elide_layers, ElisionReport, ElisionRule, LayerMatch};
pub use error::{RecolorError, Result};
pub use gradient::{next_gradient, next_unused, scheme_gradients, Gradient, PickCursor};
pub use remap::{remap_colors, Recolorer, RemapReport, Remapped};
pub use rules::{Bound, ChannelBounds, Rule, RuleTable};
pub use scheme::{builtin_schemes, ColorScheme, Role, SchemeKind, Thresholds};
pub use variants::{build_variants, write_variants, Variant};
