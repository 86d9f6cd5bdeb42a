mod all;
mod expenses;
mod footer;
mod log;

use self::log::log;
use super::*;
use expenses::expenses;
use footer::footer;

pub use all::all as render;
