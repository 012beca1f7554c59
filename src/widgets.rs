//! The three page behaviours. Each widget owns only the node ids it renders
//! or binds to; all shared state lives in the [`Dom`].

use super::*;
use crate::dom::collapse_whitespace;

mod delete_modal;
mod form_select;
mod form_steps;
mod outside_click;
mod summary;

pub(crate) use delete_modal::DeleteModal;
pub(crate) use form_select::FormSelect;
pub(crate) use form_steps::FormSteps;
pub(crate) use outside_click::dismiss_open_dropdowns;
pub use summary::DonationSummary;
