mod about;
mod all;
mod auth_modal;
mod contact;
mod fields;
mod footer;
mod home;
mod log;
mod navbar;

use self::log::log;
use super::*;
use about::about;
use auth_modal::auth_modal;
use contact::contact;
use footer::footer;
use home::home;
use navbar::navbar;

pub use all::all as render;
