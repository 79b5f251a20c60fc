//! Lexis web client
//!
//! WASM surface for the document analyzer. JavaScript owns the DOM and file
//! reading; Rust owns input normalization, the request lifecycle, and the
//! render model. The page drives one loop:
//!
//! ```text
//! app.setText(...) / app.loadFile(...)
//! let text = app.beginAnalysis();           // undefined when blocked
//! let outcome = await requestAnalysis(text, baseUrl);
//! app.applyOutcome(outcome);
//! render(app.viewState());
//! ```

mod app;
mod transport;

pub use app::{LexisApp, ViewState};
pub use transport::{request_analysis, AnalysisOutcome};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
