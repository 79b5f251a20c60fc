//! Core logic for the Lexis document analysis client: input normalization,
//! response shape resolution, and the fixed six-box render model.
//!
//! Everything here is pure; transport lives in the lexis-client crate and
//! DOM work stays in the web app.

pub mod input;
pub mod render;
pub mod resolve;

pub use input::{from_file, from_typed_text, is_text_like, DocumentText, FileLoad, FileWarning};
pub use render::{render_sections, Accent, RenderedSection, SectionBody, PLACEHOLDER};
pub use resolve::resolve;
