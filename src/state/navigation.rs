//! Navigation-related state types.

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Contact => "Contact Us",
        }
    }
}

/// Specifying where keyboard input goes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Page,
    AuthModal,
}
