use crate::gui::*;

impl TabStrip {
    /// Gesture contexts for an input over tab `tab` (or over no tab).
    pub(in crate::gui) fn gesture_contexts(&self, tab: Option<usize>) -> Vec<GestureContext> {
        let mut contexts = match tab {
            None => vec![GestureContext::NoTabHandle],
            Some(i) if self.tabs.current() == Some(i) => {
                vec![GestureContext::ActiveTabHandle, GestureContext::TabHandle]
            }
            Some(_) => vec![GestureContext::TabHandle],
        };
        if self.in_toolbar {
            contexts.push(GestureContext::ToolBar);
        }
        contexts.push(GestureContext::Generic);
        contexts
    }

    /// Offers an input at the pointer to the gesture recognizer.
    /// Returns `true` when a gesture took it.
    pub(in crate::gui::events::mouse) fn route_gesture(&self, kind: GestureInputKind) -> bool {
        let position = self.pointer.unwrap_or_default();
        let tab = self.tab_at(position.0, position.1);
        let input = GestureInput {
            kind,
            position,
            modifiers: self.modifiers,
        };
        let contexts = self.gesture_contexts(tab);
        let parameters = self.action_parameters(tab);
        let consumed = self
            .services
            .gestures
            .start_gesture(&input, &contexts, &parameters);
        if consumed {
            tracing::trace!("Gesture consumed {:?} with {:?}", kind, contexts);
        }
        consumed
    }
}
