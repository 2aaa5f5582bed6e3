//! Hook types raised by the host

use super::compiler::NormalModuleFactory;
use super::data::ResolveData;
use crate::{Error, Result};

/// Error a before-resolve tap may fail the request with.
pub type TapError = Box<dyn std::error::Error + Send + Sync>;

enum Outcome {
    Done,
    Failed(TapError),
}

/// Completion signal handed to a before-resolve tap.
///
/// Consumed by [`done`](Completion::done) or [`fail`](Completion::fail), so
/// it can be signalled at most once.
pub struct Completion<'a> {
    outcome: &'a mut Option<Outcome>,
}

impl Completion<'_> {
    /// Let the request continue to the next tap.
    pub fn done(self) {
        *self.outcome = Some(Outcome::Done);
    }

    /// Abort the request with an error.
    pub fn fail(self, error: impl Into<TapError>) {
        *self.outcome = Some(Outcome::Failed(error.into()));
    }
}

type BeforeResolveTap = Box<dyn for<'a> Fn(&mut ResolveData, Completion<'a>) + Send + Sync>;

/// Async-series hook raised before the host resolves a module request.
#[derive(Default)]
pub struct BeforeResolveHook {
    taps: Vec<(String, BeforeResolveTap)>,
}

impl BeforeResolveHook {
    pub fn tap_async<F>(&mut self, name: impl Into<String>, tap: F)
    where
        F: Fn(&mut ResolveData, Completion<'_>) + Send + Sync + 'static,
    {
        self.taps.push((name.into(), Box::new(tap)));
    }

    /// Run every tap in registration order.
    ///
    /// Stops at the first tap that fails or returns without signalling
    /// completion.
    pub fn call(&self, data: &mut ResolveData) -> Result<()> {
        for (name, tap) in &self.taps {
            let mut outcome = None;
            tap(&mut *data, Completion { outcome: &mut outcome });

            match outcome {
                Some(Outcome::Done) => {}
                Some(Outcome::Failed(e)) => {
                    return Err(Error::TapFailed {
                        tap: name.clone(),
                        message: e.to_string(),
                    });
                }
                None => return Err(Error::TapNotCompleted { tap: name.clone() }),
            }
        }
        Ok(())
    }

    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.taps.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

type FactoryTap = Box<dyn Fn(&mut NormalModuleFactory) + Send + Sync>;

/// Sync hook raised each time the compiler creates a module factory.
#[derive(Default)]
pub struct NormalModuleFactoryHook {
    taps: Vec<(String, FactoryTap)>,
}

impl NormalModuleFactoryHook {
    pub fn tap<F>(&mut self, name: impl Into<String>, tap: F)
    where
        F: Fn(&mut NormalModuleFactory) + Send + Sync + 'static,
    {
        self.taps.push((name.into(), Box::new(tap)));
    }

    pub fn call(&self, factory: &mut NormalModuleFactory) {
        for (_, tap) in &self.taps {
            tap(&mut *factory);
        }
    }

    pub fn tap_names(&self) -> impl Iterator<Item = &str> {
        self.taps.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ResolveData {
        ResolveData::new("/proj/src", "./a")
    }

    #[test]
    fn test_taps_run_in_order() {
        let mut hook = BeforeResolveHook::default();
        hook.tap_async("first", |data, done| {
            data.request.push_str("-first");
            done.done();
        });
        hook.tap_async("second", |data, done| {
            data.request.push_str("-second");
            done.done();
        });

        let mut data = data();
        hook.call(&mut data).unwrap();

        assert_eq!(data.request, "./a-first-second");
    }

    #[test]
    fn test_missing_completion_is_reported() {
        let mut hook = BeforeResolveHook::default();
        hook.tap_async("forgetful", |_, _| {});
        hook.tap_async("never-run", |data, done| {
            data.request.clear();
            done.done();
        });

        let mut data = data();
        let err = hook.call(&mut data).unwrap_err();

        assert!(matches!(err, Error::TapNotCompleted { tap } if tap == "forgetful"));
        assert_eq!(data.request, "./a");
    }

    #[test]
    fn test_failure_stops_series() {
        let mut hook = BeforeResolveHook::default();
        hook.tap_async("failing", |_, done| done.fail("denied"));

        let err = hook.call(&mut data()).unwrap_err();

        assert!(matches!(err, Error::TapFailed { tap, message } if tap == "failing" && message == "denied"));
    }
}
