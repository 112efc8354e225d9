//! Which data entry form, if any, is on screen.
//!
//! Transitions are pure: `reduce` takes the current value and an action and
//! returns the next value. The UI keeps the value in a signal and re-renders
//! whenever it changes.

use crate::metric::MetricKind;
use serde::{Deserialize, Serialize};

/// Form visibility. Exactly one value is live at a time.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum FormVisibility {
    /// No form shown.
    #[default]
    Hidden,
    /// The form for this metric is shown.
    Visible(MetricKind),
}

/// User intents that change form visibility.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormAction {
    /// Quick action button pressed.
    Show(MetricKind),
    /// Form submitted or cancelled.
    Hide,
}

impl FormVisibility {
    /// Last writer wins: showing a form replaces whichever form was open.
    pub fn reduce(self, action: FormAction) -> FormVisibility {
        match action {
            FormAction::Show(kind) => FormVisibility::Visible(kind),
            FormAction::Hide => FormVisibility::Hidden,
        }
    }

    pub fn kind(self) -> Option<MetricKind> {
        match self {
            FormVisibility::Hidden => None,
            FormVisibility::Visible(kind) => Some(kind),
        }
    }

    pub fn is_visible(self) -> bool {
        self.kind().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(FormVisibility::default(), FormVisibility::Hidden);
        assert!(!FormVisibility::default().is_visible());
    }

    #[test]
    fn test_show_then_hide() {
        for kind in MetricKind::ALL {
            let shown = FormVisibility::Hidden.reduce(FormAction::Show(kind));
            assert_eq!(shown.kind(), Some(kind));
            assert_eq!(shown.reduce(FormAction::Hide), FormVisibility::Hidden);
        }
    }

    #[test]
    fn test_last_show_wins() {
        let state = FormVisibility::Hidden
            .reduce(FormAction::Show(MetricKind::Water))
            .reduce(FormAction::Show(MetricKind::Fertilizer));
        assert_eq!(state, FormVisibility::Visible(MetricKind::Fertilizer));
    }

    #[test]
    fn test_hide_when_hidden() {
        assert_eq!(
            FormVisibility::Hidden.reduce(FormAction::Hide),
            FormVisibility::Hidden
        );
    }

    #[test]
    fn test_show_same_kind_twice() {
        let state =
            FormVisibility::Visible(MetricKind::Yield).reduce(FormAction::Show(MetricKind::Yield));
        assert_eq!(state, FormVisibility::Visible(MetricKind::Yield));
    }
}
