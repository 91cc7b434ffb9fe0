//! Single-string encoders and decoders used by the `encode` and `decode`
//! commands and by host display.

mod percent;
mod punycode;

pub use percent::{percent_decode, percent_encode};
pub use punycode::{punycode_decode, punycode_encode};

/// Removes every backslash, undoing shell escaping of the input
pub fn strip_shell_escapes(input: &str) -> String {
    input.replace('\\', "")
}
