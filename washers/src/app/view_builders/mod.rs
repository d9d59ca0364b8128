use super::theme::*;

pub mod confirmation;
pub(super) use confirmation::*;
pub mod main_view;
pub(super) use main_view::*;
pub mod overlays;
pub(super) use overlays::*;
pub mod settings;
pub(super) use settings::*;
mod shared_elements;
