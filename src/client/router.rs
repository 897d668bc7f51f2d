use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/?:tournamentId")]
    Home { tournamentId: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
