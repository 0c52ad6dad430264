mod gestures;
mod input;
mod tab_drag;
mod tab_hover;
mod wheel;
