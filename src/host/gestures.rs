use winit::event::MouseButton;
use winit::keyboard::ModifiersState;

/// Context the gesture recognizer matches bindings against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureContext {
    /// Pointer is over the strip but not over a tab.
    NoTabHandle,
    /// Pointer is over the current tab.
    ActiveTabHandle,
    TabHandle,
    /// The strip is hosted inside a toolbar.
    ToolBar,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInputKind {
    Press(MouseButton),
    DoubleClick(MouseButton),
    /// Vertical wheel delta; positive scrolls up/left.
    Wheel(f64),
}

/// Raw input offered to the gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInput {
    pub kind: GestureInputKind,
    pub position: (f64, f64),
    pub modifiers: ModifiersState,
}
