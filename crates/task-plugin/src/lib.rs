//! Slack notification task for a continuous-delivery pipeline host.
//!
//! The host drives the task through four named requests:
//!
//! - `configuration` — the ordered field schema ([`schema`])
//! - `validate` — field-level checks on a submitted configuration
//! - `execute` — render the message and post it to the Slack webhook
//! - `view` — the configuration form template
//!
//! [`SlackTaskPlugin::handle`] dispatches them; [`server`] exposes the same
//! dispatch over HTTP.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod handlers;
pub mod request;
pub mod schema;
pub mod server;
pub mod settings;
pub mod view;

pub use error::PluginError;
pub use handlers::{deliver, validate_config, SlackTaskPlugin};
pub use request::{ExecuteResult, PluginResponse, RequestName, ValidationResult};
pub use schema::{describe_configuration, FieldDefinition, FIELDS};
pub use settings::{LogFormat, PluginSettings};
pub use view::ViewTemplates;

