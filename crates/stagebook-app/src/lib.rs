//! Application layer for Stagebook
//!
//! Pure state machines and a generic runtime for the sign-in flow and the
//! tab area, enabling deterministic simulation testing with the same code
//! that runs in the terminal.
//!
//! # Components
//!
//! - [`SegmentedCodeInput`]: one-time-passcode entry split into digit cells
//! - [`App`]: UI state machine (screens, forms, navigation, feed)
//! - [`Bridge`]: Service bridge (translates App actions into service calls)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
pub mod code_input;
pub mod cooldown;
mod driver;
mod event;
mod feed;
mod field;
mod forms;
mod input;
mod navigation;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use bridge::Bridge;
pub use code_input::{CellKey, CodeInputHost, FocusHandle, FocusHandles, SegmentedCodeInput};
pub use cooldown::ResendCooldown;
pub use driver::Driver;
pub use event::{AppEvent, LoadTarget};
pub use feed::{CommentSheet, HomeFeed, Loadable, ProfileView, SheetOutcome, SnapPoint};
pub use field::{FieldKind, MASK_CHAR, TextField};
pub use forms::{LoginForm, OtpForm, RegisterField, RegisterForm};
pub use input::KeyInput;
pub use navigation::{Navigator, Route, Tab};
pub use runtime::Runtime;
pub use state::{AppConfig, Status, StatusLevel};
