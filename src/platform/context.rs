//=========================================================================
// GL Context Negotiation
//=========================================================================
//
// Opens the device window and, for GL drivers, a context on it.
//
// Attempts, in order (compatibility profile):
//   3.2 request, runtime must report ≥ 4.3
//   3.1 request, runtime must report ≥ 3.1
//
// An attempt fails if the window, the context, GL loading or the version
// check fails. A failed attempt destroys whatever it created before the
// next one starts. When every attempt fails the device has neither a
// window nor a context.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use super::backend::{Backend, BackendError, GlProfile, GlRequest, WindowSpec};

//=== Attempts ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContextAttempt {
    pub request: GlRequest,
    pub min_version: (u32, u32),
}

pub(crate) const CONTEXT_ATTEMPTS: [ContextAttempt; 2] = [
    ContextAttempt {
        request: GlRequest {
            major: 3,
            minor: 2,
            profile: GlProfile::Compatibility,
        },
        min_version: (4, 3),
    },
    ContextAttempt {
        request: GlRequest {
            major: 3,
            minor: 1,
            profile: GlProfile::Compatibility,
        },
        min_version: (3, 1),
    },
];

/// Window plus optional context created for a device.
pub(crate) struct Surface<B: Backend> {
    pub window: B::Window,
    pub context: Option<B::Context>,
}

//=== Creation ============================================================

/// Opens a plain window (no GL).
pub(crate) fn create_plain_window<B: Backend>(backend: &mut B, spec: &WindowSpec) -> Option<Surface<B>> {
    info!(target: "platform::context", "Creating window");
    match backend.create_window(spec) {
        Ok(window) => Some(Surface { window, context: None }),
        Err(e) => {
            error!(target: "platform::context", "Could not initialize display: {}", e);
            None
        }
    }
}

/// Runs the attempt list until one succeeds, then makes the context
/// current and applies the swap interval.
pub(crate) fn create_gl_window<B: Backend>(
    backend: &mut B,
    spec: &WindowSpec,
    swap_interval: u32,
) -> Option<Surface<B>> {
    let Some((window, context)) = CONTEXT_ATTEMPTS
        .iter()
        .find_map(|attempt| try_attempt(backend, spec, attempt).ok())
    else {
        error!(target: "platform::context", "Unable to create context; could not initialize display");
        return None;
    };

    info!(target: "platform::context", "Context and window created");

    if let Err(e) = backend.make_current(&window, &context) {
        warn!(target: "platform::context", "Make current failed: {}", e);
    }
    let attributes = backend.gl_attributes(&context);
    info!(target: "platform::context", "GL attributes: {}", attributes);
    apply_swap_interval(backend, &context, swap_interval);

    Some(Surface {
        window,
        context: Some(context),
    })
}

fn try_attempt<B: Backend>(
    backend: &mut B,
    spec: &WindowSpec,
    attempt: &ContextAttempt,
) -> Result<(B::Window, B::Context), BackendError> {
    let request = attempt.request;
    info!(target: "platform::context", "Creating window with context {}", request);

    let result = create_verified(backend, spec, attempt);
    if let Err(e) = &result {
        info!(target: "platform::context", "Creating window with context {} failed: {}", request, e);
    }
    result
}

fn create_verified<B: Backend>(
    backend: &mut B,
    spec: &WindowSpec,
    attempt: &ContextAttempt,
) -> Result<(B::Window, B::Context), BackendError> {
    let window = backend.create_window(spec)?;

    let mut context = match backend.create_context(&window, attempt.request) {
        Ok(context) => context,
        Err(e) => {
            backend.destroy_window(window);
            return Err(e);
        }
    };

    let verified = backend.load_gl(&mut context).and_then(|()| {
        let actual = backend.gl_version(&context);
        if version_at_least(actual, attempt.min_version) {
            Ok(())
        } else {
            Err(BackendError::Version {
                required: attempt.min_version,
                actual,
            })
        }
    });

    match verified {
        Ok(()) => Ok((window, context)),
        Err(e) => {
            backend.destroy_context(context);
            backend.destroy_window(window);
            Err(e)
        }
    }
}

fn version_at_least(actual: (u32, u32), required: (u32, u32)) -> bool {
    actual.0 > required.0 || (actual.0 == required.0 && actual.1 >= required.1)
}

//=== Swap Interval =======================================================

/// Applies `interval` (clamped to 1). Adaptive vsync is tried first when
/// any sync is requested.
pub(crate) fn apply_swap_interval<B: Backend>(backend: &mut B, context: &B::Context, interval: u32) {
    let interval = interval.min(1) as i32;

    if interval > 0 && backend.set_swap_interval(context, -1).is_ok() {
        info!(target: "platform::context", "Adaptive vsync enabled");
        return;
    }

    if let Err(e) = backend.set_swap_interval(context, interval) {
        warn!(target: "platform::context", "Setting swap interval {} failed: {}", interval, e);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
