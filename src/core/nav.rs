/// Mobile menu state: the link list and the hamburger button each carry
/// their own active flag, toggled together and cleared together.
#[derive(Debug, Clone, Default)]
pub struct MobileNav {
    pub links_open: bool,
    pub button_active: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger click: toggle both indicators.
    pub fn toggle_menu(&mut self) {
        self.links_open = !self.links_open;
        self.button_active = !self.button_active;
    }

    /// Navigation link click: close the menu unconditionally.
    pub fn follow_link(&mut self) {
        self.links_open = false;
        self.button_active = false;
    }

    pub fn is_open(&self) -> bool {
        self.links_open
    }
}
