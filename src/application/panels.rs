/// Which of the two mutually exclusive panels is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Results,
    Demo,
}

impl PanelVisibility {
    pub fn show_demo(&mut self) {
        *self = Self::Demo;
    }

    pub fn hide_demo(&mut self) {
        *self = Self::Results;
    }

    pub fn results_visible(self) -> bool {
        self == Self::Results
    }

    pub fn demo_visible(self) -> bool {
        self == Self::Demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_results() {
        let panels = PanelVisibility::default();
        assert!(panels.results_visible());
        assert!(!panels.demo_visible());
    }

    #[test]
    fn test_toggles_are_exclusive() {
        let mut panels = PanelVisibility::default();

        panels.show_demo();
        assert!(panels.demo_visible());
        assert!(!panels.results_visible());

        panels.hide_demo();
        assert!(panels.results_visible());
        assert!(!panels.demo_visible());
    }
}
