//! Dice drop demo: a handful of die models tumbling in a box sized to the window.

pub mod dice3d;
