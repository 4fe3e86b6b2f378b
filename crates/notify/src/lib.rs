//! Slack notifications for pipeline tasks.
//!
//! This crate turns a task's configuration and its runtime environment into
//! a Slack message and delivers it through an incoming webhook.
//!
//! # Usage
//!
//! ```no_run
//! use slack_notify::{NotifyChannel, RawTaskConfig, SlackChannel, SlackMessage, TaskConfig, TaskContext};
//!
//! # async fn run(raw: RawTaskConfig, context: TaskContext) -> Result<(), Box<dyn std::error::Error>> {
//! let config = TaskConfig::try_from(raw)?;
//! let message = SlackMessage::render(&config, &context);
//!
//! SlackChannel::from_config(reqwest::Client::new(), &config)
//!     .send(&message)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`ColorType`] resolves the attachment color
//! - [`MessageFormatter`] substitutes `${VAR}` placeholders
//! - [`SlackMessage`] is the resolved message
//! - [`NotifyChannel`] is the delivery seam, implemented by [`SlackChannel`]

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod channels;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod message;

pub use channels::slack::SlackChannel;
pub use channels::NotifyChannel;
pub use color::ColorType;
pub use config::{ChannelType, Property, RawTaskConfig, TaskConfig, TaskContext};
pub use error::{ChannelError, ConfigError};
pub use format::MessageFormatter;
pub use message::SlackMessage;
