//! Upload ingestion.
//!
//! Turns a user-submitted photo into the two forms the rest of the crate
//! works with: the decoded interchange image (RGB, for display) and the
//! processing frame handed to the detector (BGR).
//!
//! The ingestion layer is responsible for:
//! - Accepting only `.jpg`, `.jpeg` and `.png` uploads
//! - Enforcing the upload size limit before decoding
//! - Decoding in memory and normalizing to 8-bit RGB
//!
//! Decode failures are reported here; the detector never sees them.

pub mod upload;

pub use upload::{decode_upload, load_upload, Upload, SUPPORTED_EXTENSIONS};
