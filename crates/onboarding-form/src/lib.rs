//! Employer registration onboarding form.
//!
//! The crate owns everything with decision-making content: the field catalogue,
//! the toggle-driven validation schema, the form controller state machine, and
//! the view models a front end binds to. Front ends supply a [`Navigator`]
//! implementation and render the views.
//!
//! [`Navigator`]: workflows::registration::Navigator

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
