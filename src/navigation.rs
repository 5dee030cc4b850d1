use gloo::console;
use thiserror::Error;
use web_sys::MouseEvent;
use yew::Callback;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No router available to navigate to {path}")]
    NoRouter { path: &'static str },
}

/// A fixed destination offered to the user, with the text shown on its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    path: &'static str,
    label: &'static str,
}

impl NavigationTarget {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        NavigationTarget { path, label }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

pub const HOME: NavigationTarget = NavigationTarget::new("/", "Go Home");
pub const MAKE_RESERVATION: NavigationTarget =
    NavigationTarget::new("/guest/reserve", "Make Reservation");

/// Everything the not-found page shows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundContent {
    heading: &'static str,
    message: &'static str,
    actions: [NavigationTarget; 2],
}

impl NotFoundContent {
    pub const fn standard() -> Self {
        NotFoundContent {
            heading: "404 - Page Not Found",
            message: "The page you're looking for doesn't exist.",
            actions: [HOME, MAKE_RESERVATION],
        }
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn actions(&self) -> &[NavigationTarget] {
        &self.actions
    }
}

impl Default for NotFoundContent {
    fn default() -> Self {
        Self::standard()
    }
}

/// Something that can move the application to another location.
pub trait Navigate {
    fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError>;
}

/// Pushes the raw path; resolving it (or falling back to not-found) is the router's job.
impl Navigate for Navigator {
    fn navigate(&self, target: &NavigationTarget) -> Result<(), NavigationError> {
        self.push(&AnyRoute::new(target.path));
        Ok(())
    }
}

/// Sends a single navigation intent for `target`.
pub fn dispatch<N: Navigate>(
    navigator: Option<&N>,
    target: &NavigationTarget,
) -> Result<(), NavigationError> {
    match navigator {
        Some(navigator) => navigator.navigate(target),
        None => Err(NavigationError::NoRouter { path: target.path }),
    }
}

/// Click handler that navigates to `target`, logging anything that goes wrong.
pub fn intent_callback(
    navigator: Option<Navigator>,
    target: NavigationTarget,
) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(err) = dispatch(navigator.as_ref(), &target) {
            console::warn!(err.to_string());
        }
    })
}
