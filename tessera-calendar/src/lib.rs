//! Calendar header component for the Tessera UI framework.
//!
//! # Usage
//!
//! The crate renders with the pipelines of `tessera-components`, so register
//! those as usual and provide a Material theme:
//!
//! ```no_run
//! use tessera_components::theme::{MaterialTheme, material_theme};
//!
//! fn app() {
//!     material_theme(MaterialTheme::default, || {
//!         // Your app code here
//!     });
//! }
//! ```
//!
//! Then place a header and handle the values it emits.
//!
//! # Example
//!
//! ```
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_calendar::{
//!     calendar_date::{CalendarDate, CalendarMode},
//!     calendar_header::{CalendarHeaderArgs, calendar_header},
//! };
//! # use tessera_components::theme::{MaterialTheme, material_theme};
//! # material_theme(MaterialTheme::default, || {
//!
//! calendar_header(
//!     &CalendarHeaderArgs::default()
//!         .mode(CalendarMode::Month)
//!         .show_today_button(true)
//!         .on_value_change(|next: CalendarDate| { /* store the value */ }),
//! );
//! # });
//! # }
//! # component();
//! ```
//!
//! The header is presentational: it never stores the date itself. Every
//! interaction produces a candidate [`CalendarDate`](calendar_date::CalendarDate)
//! reported through `on_value_change`, or a
//! [`CalendarMode`](calendar_date::CalendarMode) through `on_mode_change`.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar_date;
pub mod calendar_header;
pub mod calendar_locale;
pub mod calendar_range;
pub mod select;
