//! Player-facing text for each stage of a transport.

pub(crate) const HUM: &str = "The camera begins to hum softly.";

/// Sent to the traveler when the hum starts; pushes the room text out of view.
pub(crate) const CLEAR_VIEW: &str = "\n";

pub(crate) const DISSOLVE_SELF: &str = "As you look down, you then notice that you are being broken down into\nsmall particles.";

pub(crate) const SUCTION_SELF: &str =
    "You then feel a strange pulling sensation as you are sucked into the camera.";

pub(crate) const ARRIVE_SELF: &str = "Suddenly you are standing in a different booth.";

pub(crate) const ARRIVE_SAME_SELF: &str = "The camera spits you back out into the very same booth.";

pub(crate) const FIZZLE_AT_DESTINATION: &str =
    "The camera crackles for a moment, but nothing comes out.";

pub(crate) fn press_self(label: &str) -> String {
    format!("You press the button for {label}.")
}

pub(crate) fn press_onlookers(name: &str, label: &str) -> String {
    format!("{name} presses the button for {label}.")
}

pub(crate) fn dissolve_onlookers(name: &str) -> String {
    format!("{name} dissolves into pure energy.")
}

pub(crate) fn suction_onlookers(name: &str) -> String {
    format!("{name}'s energy is sucked into the camera.")
}

pub(crate) fn arrive_onlookers(name: &str) -> String {
    format!("{name} is thrown out of the camera.")
}

pub(crate) fn thrown_back_onlookers(name: &str) -> String {
    format!("{name} is thrown back from the camera.")
}
