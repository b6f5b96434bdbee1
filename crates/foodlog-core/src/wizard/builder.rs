//! Builder for creating and configuring Wizard instances.

use super::Wizard;
use crate::{service::FoodService, view::NullView, view::WizardView};

/// Builder for creating and configuring [`Wizard`] instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder<S, V = NullView> {
    service: S,
    view: V,
}

impl<S: FoodService> WizardBuilder<S> {
    /// Creates a new builder for `service` that renders nothing.
    pub fn new(service: S) -> Self {
        Self {
            service,
            view: NullView,
        }
    }
}

impl<S: FoodService, V: WizardView> WizardBuilder<S, V> {
    /// Sets the view the wizard reports to.
    pub fn with_view<W: WizardView>(self, view: W) -> WizardBuilder<S, W> {
        WizardBuilder {
            service: self.service,
            view,
        }
    }

    /// Builds the wizard and shows its first step.
    pub fn build(self) -> Wizard<S, V> {
        Wizard::new(self.service, self.view)
    }
}
