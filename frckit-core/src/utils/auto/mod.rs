//! Autonomous routine registry for the robot control program.
//!
//! Routines are registered as zero-argument factories keyed by name. One name
//! is designated the default; the dashboard selector is built lazily from the
//! registry on first request and cached for the remainder of the process.
//! Everything here assumes the single control thread of the robot loop.

use alloc::{boxed::Box, string::String};

use hashbrown::HashMap;
use thiserror::Error;

/// Zero-argument factory producing a fresh command instance on every call.
pub type RoutineFactory<C> = Box<dyn Fn() -> C + Send>;

/// Seam for the dashboard's selectable-options widget.
///
/// The robot program implements this over whatever chooser type its dashboard
/// library provides; tests and simulators implement it over plain records.
pub trait OptionChooser {
    /// Command type carried by the chooser's entries.
    type Command;

    /// Install `command` as the pre-selected entry shown under `name`.
    fn set_default(&mut self, name: &str, command: Self::Command);

    /// Add a selectable entry shown under `name`.
    fn add_option(&mut self, name: &str, command: Self::Command);
}

/// Errors from routine lookup and selector construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutoError {
    /// A routine was requested under a name that was never registered.
    #[error("autonomous routine `{0}` is not registered")]
    UnknownRoutine(String),
    /// The configured default routine was missing when the selector was built.
    #[error("default routine `{0}` does not exist")]
    MissingDefault(String),
}

/// Build-once state of the cached selector widget.
enum Selector<W> {
    Unbuilt,
    Built(W),
}

impl<W> Selector<W> {
    fn as_built(&self) -> Option<&W> {
        match self {
            Selector::Built(widget) => Some(widget),
            Selector::Unbuilt => None,
        }
    }
}

/// Registry of named autonomous routines plus the cached dashboard selector.
///
/// Owned by the robot container and passed by reference to whatever publishes
/// the selector; there is no process-wide state and no locking.
pub struct AutoRoutines<W: OptionChooser> {
    routines: HashMap<String, RoutineFactory<W::Command>>,
    default_name: String,
    selector: Selector<W>,
}

impl<W: OptionChooser> AutoRoutines<W> {
    /// Create an empty registry whose selector will pre-select `default_name`.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            routines: HashMap::new(),
            default_name: default_name.into(),
            selector: Selector::Unbuilt,
        }
    }

    /// Name of the routine the selector pre-selects.
    pub fn default_routine(&self) -> &str {
        &self.default_name
    }

    /// Reconfigure the pre-selected routine name.
    ///
    /// Only affects a selector that has not been built yet; an already cached
    /// selector keeps the default it was built with.
    pub fn set_default_routine(&mut self, name: impl Into<String>) {
        self.default_name = name.into();
    }

    /// Register `factory` under `name`, replacing any prior entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> W::Command + Send + 'static,
    ) {
        let name = name.into();
        if self
            .routines
            .insert(name.clone(), Box::new(factory))
            .is_some()
        {
            tracing::warn!(routine = %name, "replacing previously registered routine");
        } else {
            tracing::debug!(routine = %name, "registered routine");
        }
    }

    /// Names of all registered routines, in unspecified order.
    pub fn routine_names(&self) -> impl Iterator<Item = &str> {
        self.routines.keys().map(String::as_str)
    }

    /// Invoke the factory registered under `name`, yielding a fresh command.
    pub fn resolve(&self, name: &str) -> Result<W::Command, AutoError> {
        let factory = self
            .routines
            .get(name)
            .ok_or_else(|| AutoError::UnknownRoutine(String::from(name)))?;
        Ok(factory())
    }

    /// The cached selector, or `None` if it has not been built yet.
    pub fn built_chooser(&self) -> Option<&W> {
        self.selector.as_built()
    }

    /// Build the dashboard selector on first call and return it; later calls
    /// return the cached widget untouched.
    ///
    /// The default routine's entry is installed first, then every other
    /// registered routine is added in unspecified order. Registry changes
    /// after the first build do not reach the cached widget.
    pub fn chooser(&mut self) -> Result<&W, AutoError>
    where
        W: Default,
    {
        if matches!(self.selector, Selector::Unbuilt) {
            let default_command = self
                .resolve(&self.default_name)
                .map_err(|_| AutoError::MissingDefault(self.default_name.clone()))?;

            let mut widget = W::default();
            widget.set_default(&self.default_name, default_command);

            for (name, factory) in &self.routines {
                if *name == self.default_name {
                    continue;
                }
                widget.add_option(name, factory());
            }

            tracing::info!(
                default = %self.default_name,
                routines = self.routines.len(),
                "autonomous selector built"
            );
            self.selector = Selector::Built(widget);
        }

        self.selector
            .as_built()
            .ok_or_else(|| AutoError::MissingDefault(self.default_name.clone()))
    }
}
