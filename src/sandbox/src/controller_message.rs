use crate::sim_state::InsertionMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	SetMode(InsertionMode),
	ToggleMode,
	// world coordinates, snapped by the receiver
	Click([f32; 2]),
	MagnitudeX(i32),
	MagnitudeY(i32),
}
