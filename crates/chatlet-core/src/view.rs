use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the widget is showing just its toggle button or the full chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WidgetView {
    #[default]
    Collapsed,
    Expanded,
}

impl WidgetView {
    /// Flip between collapsed and expanded, returning the new state.
    pub fn toggle(&mut self) -> WidgetView {
        *self = match self {
            WidgetView::Collapsed => WidgetView::Expanded,
            WidgetView::Expanded => WidgetView::Collapsed,
        };
        *self
    }

    /// Expand the widget. Returns `true` if it was collapsed.
    pub fn expand(&mut self) -> bool {
        self.transition_to(WidgetView::Expanded)
    }

    /// Collapse the widget. Returns `true` if it was expanded.
    pub fn collapse(&mut self) -> bool {
        self.transition_to(WidgetView::Collapsed)
    }

    pub fn is_expanded(self) -> bool {
        self == WidgetView::Expanded
    }

    fn transition_to(&mut self, target: WidgetView) -> bool {
        let changed = *self != target;
        *self = target;
        changed
    }
}
