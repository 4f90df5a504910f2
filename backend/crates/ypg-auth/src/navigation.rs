use crate::Page;

/// What a navigation resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Page),
    Redirect(&'static str),
}

impl Navigation {
    pub fn page(&self) -> Option<Page> {
        match *self {
            Self::Render(page) => Some(page),
            Self::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<&'static str> {
        match *self {
            Self::Render(_) => None,
            Self::Redirect(target) => Some(target),
        }
    }
}
