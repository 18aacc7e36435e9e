use ratatui::layout::Rect;

/// Emitted by the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    GoToLogin,
}

/// Landing screen with a collapsible navigation menu.
#[derive(Debug, Clone, Default)]
pub struct HomeController {
    pub menu_open: bool,
    /// Last-rendered areas of the menu and its toggle (updated by the renderer each frame).
    pub menu_area: Option<Rect>,
    pub toggle_area: Option<Rect>,
}

fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|r| {
        column >= r.x && column < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height)
    })
}

impl HomeController {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn go_to_login(&mut self) -> HomeEvent {
        self.close_menu();
        HomeEvent::GoToLogin
    }

    /// Mouse click at a terminal cell. Clicking the toggle flips the menu, clicking the
    /// open menu navigates, clicking anywhere else closes it.
    pub fn click(&mut self, column: u16, row: u16) -> Option<HomeEvent> {
        if hit(self.toggle_area, column, row) {
            self.toggle_menu();
            return None;
        }
        if self.menu_open && hit(self.menu_area, column, row) {
            return Some(self.go_to_login());
        }
        self.close_menu();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> HomeController {
        HomeController {
            menu_open: false,
            menu_area: Some(Rect::new(60, 2, 20, 3)),
            toggle_area: Some(Rect::new(76, 0, 4, 1)),
        }
    }

    #[test]
    fn go_to_login_closes_menu_first() {
        let mut home = rendered();
        home.toggle_menu();

        assert_eq!(home.go_to_login(), HomeEvent::GoToLogin);
        assert!(!home.menu_open);
    }

    #[test]
    fn clicking_toggle_flips_menu() {
        let mut home = rendered();
        assert_eq!(home.click(77, 0), None);
        assert!(home.menu_open);
        assert_eq!(home.click(77, 0), None);
        assert!(!home.menu_open);
    }

    #[test]
    fn clicking_outside_closes_menu() {
        let mut home = rendered();
        home.menu_open = true;

        assert_eq!(home.click(5, 10), None);
        assert!(!home.menu_open);
    }

    #[test]
    fn clicking_inside_open_menu_navigates() {
        let mut home = rendered();
        home.menu_open = true;

        assert_eq!(home.click(65, 3), Some(HomeEvent::GoToLogin));
        assert!(!home.menu_open);
    }

    #[test]
    fn closed_menu_area_is_not_clickable() {
        let mut home = rendered();
        assert_eq!(home.click(65, 3), None);
    }
}
