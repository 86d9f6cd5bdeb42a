//! Widget helpers shared by the views: the loading spinner and the style
//! palette built from the active theme.

pub mod spinner;
pub mod styling;
