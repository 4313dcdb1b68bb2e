//! Preload-list variable handling.
//!
//! The loader reads its preload list once, at process start. After that the
//! variable is only an inheritance hazard: every `system()`, `popen()` or
//! spawned child copies it and gets the same libraries injected. The helpers
//! here remove it from the live process environment or from an environment
//! map built for a child.

use std::collections::HashMap;
use std::ffi::CStr;
use std::io;

use crate::error::PreloadError;

/// Preload-list variable read by this target's dynamic loader.
#[cfg(target_vendor = "apple")]
pub const PRELOAD_VAR: &CStr = c"DYLD_INSERT_LIBRARIES";

/// Preload-list variable read by this target's dynamic loader.
#[cfg(not(target_vendor = "apple"))]
pub const PRELOAD_VAR: &CStr = c"LD_PRELOAD";

/// Every preload-list variable we know of, across loaders.
///
/// Entries must be valid POSIX environment variable names. This is enforced
/// by tests.
pub const PRELOAD_VARS: &[&str] = &["LD_PRELOAD", "DYLD_INSERT_LIBRARIES"];

/// Removes `name` from the process environment.
///
/// Goes through the C library so the `environ` table that `system()` and
/// `posix_spawn` copy is the one that changes. Removing an absent variable
/// is not an error.
pub fn unset_var(name: &CStr) -> Result<(), PreloadError> {
    let bytes = name.to_bytes();
    if bytes.is_empty() || bytes.contains(&b'=') {
        return Err(PreloadError::InvalidName(
            name.to_string_lossy().into_owned(),
        ));
    }

    // SAFETY: `name` is NUL-terminated. Callers mutate the environment before
    // any other thread can be reading it.
    let rc = unsafe { libc::unsetenv(name.as_ptr()) };
    if rc != 0 {
        return Err(PreloadError::Os {
            name: name.to_string_lossy().into_owned(),
            source: io::Error::last_os_error(),
        });
    }
    Ok(())
}

/// Drops the preload-list variable from the current process.
///
/// Best effort: a failed removal has no recovery path, so it is ignored.
/// Must not print or panic, it runs inside arbitrary host processes.
pub fn scrub_preload() {
    let _ = unset_var(PRELOAD_VAR);
}

/// Returns a copy of `env` without any preload-list variable.
///
/// For hosts that hand an explicit environment to a child (`env_clear()`
/// followed by `envs(..)`) instead of letting it inherit `environ`. Strips
/// every known loader's variable, not only this target's.
pub fn sanitize_env(env: &HashMap<String, String>) -> HashMap<String, String> {
    let mut sanitized = env.clone();
    for var in PRELOAD_VARS {
        sanitized.remove(*var);
    }
    sanitized
}
