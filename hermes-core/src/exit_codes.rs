//! Process exit codes.
//!
//! The exit code is the wire contract between the binary and the shell
//! integration functions emitted by `hermes init`: `0` means the generated
//! command can be placed straight into the input buffer, `10` means it needs
//! a review warning first, and every other non-zero code is an ordinary tool
//! failure whose diagnostics go to stderr instead of the buffer. Changing any
//! of these values is a compatibility break for installed integrations.

/// Safe command, place directly into the shell input buffer
pub const SUCCESS: i32 = 0;
/// Generic failure
pub const ERROR: i32 = 1;
/// Configuration problem (missing API key, unreadable config file)
pub const CONFIG: i32 = 2;
/// Invalid CLI usage (unsupported shell, bad arguments)
pub const INVALID: i32 = 3;
/// Provider call failed (network, HTTP error, malformed response)
pub const API: i32 = 4;
/// Command requires manual review before execution.
///
/// Reserved sentinel outside the 1-9 ordinary-error range so calling shells
/// can discriminate "needs review" from "tool failure".
pub const ATTENTION: i32 = 10;
