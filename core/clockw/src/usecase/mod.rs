pub(crate) mod widget;

pub(crate) use widget::{Outcome, WidgetUseCase};
